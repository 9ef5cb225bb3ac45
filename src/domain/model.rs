use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// One raw record from the subscriber list, kept loosely typed so a bad
/// record skips one subscriber instead of failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
    /// Extracts the typed subscriber, failing on missing fields.
    pub fn subscriber(&self) -> Result<Subscriber> {
        let subscriber =
            serde_json::from_value(serde_json::Value::Object(self.data.clone()))?;
        Ok(subscriber)
    }

    /// Best-effort email for log messages about a bad record.
    pub fn email_or_unknown(&self) -> &str {
        self.data
            .get("email")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
    }
}

/// A validated subscriber. `sign` is still the raw string from the record;
/// the legacy `rashi` field name is accepted on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub name: String,
    pub email: String,
    #[serde(alias = "rashi")]
    pub sign: String,
}

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedEmail {
    pub recipient: String,
    pub subject: String,
    pub html: String,
}

/// Output of the transform phase: everything composable for one date.
#[derive(Debug, Clone)]
pub struct ComposeResult {
    pub date: NaiveDate,
    pub emails: Vec<RenderedEmail>,
    /// Records dropped for a malformed shape or an unknown sign.
    pub skipped: usize,
}

/// Final delivery accounting for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySummary {
    pub date: NaiveDate,
    /// Subscribers read from the list, including skipped ones.
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl DeliverySummary {
    pub fn all_delivered(&self) -> bool {
        self.failed == 0 && self.skipped == 0 && self.sent == self.attempted
    }
}
