// Adapters layer: concrete implementations of the domain ports for external
// systems (filesystem storage, SMTP delivery, dry-run outbox).

pub mod outbox;
pub mod smtp;
pub mod storage;

pub use outbox::OutboxMailer;
pub use smtp::SmtpMailer;
pub use storage::LocalStorage;
