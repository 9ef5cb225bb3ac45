use crate::domain::model::{ComposeResult, DeliverySummary, RenderedEmail, UserRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn users_path(&self) -> &str;
    fn outbox_path(&self) -> &str;
    /// Fixed date for the run; `None` means today.
    fn target_date(&self) -> Option<NaiveDate>;
}

/// Delivery backend. Real SMTP in production, an outbox directory for
/// dry runs, mocks in tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, email: &RenderedEmail) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<UserRecord>>;
    async fn transform(&self, records: Vec<UserRecord>) -> Result<ComposeResult>;
    async fn load(&self, composed: ComposeResult) -> Result<DeliverySummary>;
}
