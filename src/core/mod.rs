pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    ComposeResult, DeliverySummary, RenderedEmail, Subscriber, UserRecord,
};
pub use crate::domain::ports::{ConfigProvider, Mailer, Pipeline, Storage};
pub use crate::utils::error::Result;
