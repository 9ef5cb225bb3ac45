use crate::astro::sign::Sign;
use crate::core::{ComposeResult, ConfigProvider, DeliverySummary, Mailer, Storage, UserRecord};
use crate::render;
use crate::utils::error::{HoroscopeError, Result};

/// The daily horoscope pipeline: read the subscriber list, compose one
/// email per valid subscriber, hand each to the mailer.
pub struct DailyPipeline<S: Storage, C: ConfigProvider, M: Mailer> {
    storage: S,
    config: C,
    mailer: M,
}

impl<S: Storage, C: ConfigProvider, M: Mailer> DailyPipeline<S, C, M> {
    pub fn new(storage: S, config: C, mailer: M) -> Self {
        Self {
            storage,
            config,
            mailer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: Mailer> crate::core::Pipeline for DailyPipeline<S, C, M> {
    async fn extract(&self) -> Result<Vec<UserRecord>> {
        let path = self.config.users_path();
        tracing::debug!("Reading user list from {}", path);
        let bytes = self.storage.read_file(path).await?;

        let json: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| HoroscopeError::UserListError {
                message: format!("cannot parse {}: {}", path, e),
            })?;

        let mut records = Vec::new();
        if let serde_json::Value::Array(items) = json {
            for item in items {
                if let serde_json::Value::Object(obj) = item {
                    records.push(UserRecord { data: obj });
                } else {
                    tracing::warn!("⚠️ Ignoring non-object entry in {}", path);
                }
            }
        } else {
            return Err(HoroscopeError::UserListError {
                message: format!("{} must contain a JSON array of users", path),
            });
        }

        if records.is_empty() {
            return Err(HoroscopeError::UserListError {
                message: format!("no users configured in {}", path),
            });
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<UserRecord>) -> Result<ComposeResult> {
        let date = self
            .config
            .target_date()
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        tracing::info!("🗓️ Generating predictions for {}", date.format("%d-%m-%Y"));

        let mut emails = Vec::new();
        let mut skipped = 0usize;

        for record in &records {
            let subscriber = match record.subscriber() {
                Ok(subscriber) => subscriber,
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Skipping malformed record for {}: {}",
                        record.email_or_unknown(),
                        e
                    );
                    skipped += 1;
                    continue;
                }
            };

            let sign = match subscriber.sign.parse::<Sign>() {
                Ok(sign) => sign,
                Err(_) => {
                    tracing::warn!(
                        "⚠️ Invalid sign '{}' for {}, skipping",
                        subscriber.sign,
                        subscriber.name
                    );
                    skipped += 1;
                    continue;
                }
            };

            tracing::debug!("📝 Generating prediction for {} ({})", subscriber.name, sign);
            emails.push(render::render_email(&subscriber, sign, date));
        }

        Ok(ComposeResult {
            date,
            emails,
            skipped,
        })
    }

    async fn load(&self, composed: ComposeResult) -> Result<DeliverySummary> {
        let attempted = composed.emails.len() + composed.skipped;
        let mut sent = 0usize;
        let mut failed = 0usize;

        tracing::info!("📧 Processing {} user(s)...", attempted);
        for email in &composed.emails {
            match self.mailer.deliver(email).await {
                Ok(()) => {
                    sent += 1;
                    tracing::info!("✅ Email sent successfully to {}", email.recipient);
                }
                Err(e) => {
                    failed += 1;
                    tracing::error!("❌ Error sending email to {}: {}", email.recipient, e);
                }
            }
        }

        Ok(DeliverySummary {
            date: composed.date,
            attempted,
            sent,
            failed,
            skipped: composed.skipped,
        })
    }
}
