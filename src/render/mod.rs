//! Email and preview rendering.

pub mod html;

pub use html::{email_body, plain_text, render_email, subject_line};
