pub mod adapters;
pub mod astro;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, OutboxMailer, SmtpMailer};
pub use astro::{generate, sign_from_birth_date, PredictionResult, Sign};
pub use config::{JobConfig, SmtpConfig};
pub use core::{engine::HoroscopeEngine, pipeline::DailyPipeline};
pub use domain::model::{DeliverySummary, RenderedEmail, Subscriber};
pub use utils::error::{HoroscopeError, Result};
