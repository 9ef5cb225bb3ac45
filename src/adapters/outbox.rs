use async_trait::async_trait;

use crate::core::{Mailer, Storage};
use crate::domain::model::RenderedEmail;
use crate::utils::error::Result;

/// Dry-run delivery: writes each rendered email into an outbox directory
/// instead of talking to an SMTP server.
pub struct OutboxMailer<S: Storage> {
    storage: S,
    outbox_dir: String,
}

impl<S: Storage> OutboxMailer<S> {
    pub fn new(storage: S, outbox_dir: String) -> Self {
        Self {
            storage,
            outbox_dir,
        }
    }

    fn file_path(&self, recipient: &str) -> String {
        // Recipients come from user data; keep them from escaping the
        // outbox directory.
        let safe = recipient.replace(['/', '\\'], "_");
        format!("{}/{}.html", self.outbox_dir, safe)
    }
}

#[async_trait]
impl<S: Storage> Mailer for OutboxMailer<S> {
    async fn deliver(&self, email: &RenderedEmail) -> Result<()> {
        let path = self.file_path(&email.recipient);
        self.storage.write_file(&path, email.html.as_bytes()).await?;
        tracing::info!("📬 Dry run: wrote {} instead of sending", path);
        Ok(())
    }
}
