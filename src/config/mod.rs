pub mod job;
pub mod smtp;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use job::JobConfig;
pub use smtp::SmtpConfig;
