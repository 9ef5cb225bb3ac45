use serde::{Deserialize, Serialize};

use crate::utils::error::{HoroscopeError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_range, Validate,
};

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// SMTP connection settings. Credentials follow the Gmail app-password
/// flow; a job file can supply them, otherwise they come from the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub sender_address: String,
    pub app_password: String,
}

impl SmtpConfig {
    /// Reads `GMAIL_ADDRESS` / `GMAIL_APP_PASSWORD`, with `SMTP_HOST` and
    /// `SMTP_PORT` as optional overrides.
    pub fn from_env() -> Result<Self> {
        let sender_address =
            std::env::var("GMAIL_ADDRESS").map_err(|_| HoroscopeError::MissingConfigError {
                field: "GMAIL_ADDRESS".to_string(),
            })?;
        let app_password =
            std::env::var("GMAIL_APP_PASSWORD").map_err(|_| HoroscopeError::MissingConfigError {
                field: "GMAIL_APP_PASSWORD".to_string(),
            })?;

        let host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());
        let port = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| HoroscopeError::InvalidConfigValueError {
                    field: "SMTP_PORT".to_string(),
                    value: raw.clone(),
                    reason: "must be a port number".to_string(),
                })?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            host,
            port,
            sender_address,
            app_password,
        })
    }
}

impl Validate for SmtpConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("smtp.host", &self.host)?;
        validate_range("smtp.port", self.port, 1, u16::MAX)?;
        validate_email("smtp.sender_address", &self.sender_address)?;
        validate_non_empty_string("smtp.app_password", &self.app_password)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_credentials() {
        // Single test mutates these variables so parallel runs stay safe.
        std::env::remove_var("GMAIL_ADDRESS");
        std::env::remove_var("GMAIL_APP_PASSWORD");
        std::env::remove_var("SMTP_HOST");
        std::env::remove_var("SMTP_PORT");

        let err = SmtpConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            HoroscopeError::MissingConfigError { ref field } if field == "GMAIL_ADDRESS"
        ));

        std::env::set_var("GMAIL_ADDRESS", "sender@example.com");
        std::env::set_var("GMAIL_APP_PASSWORD", "app-password");

        let config = SmtpConfig::from_env().unwrap();
        assert_eq!(config.host, DEFAULT_SMTP_HOST);
        assert_eq!(config.port, DEFAULT_SMTP_PORT);
        assert_eq!(config.sender_address, "sender@example.com");

        std::env::set_var("SMTP_HOST", "mail.example.com");
        std::env::set_var("SMTP_PORT", "2525");
        let config = SmtpConfig::from_env().unwrap();
        assert_eq!(config.host, "mail.example.com");
        assert_eq!(config.port, 2525);

        std::env::remove_var("GMAIL_ADDRESS");
        std::env::remove_var("GMAIL_APP_PASSWORD");
        std::env::remove_var("SMTP_HOST");
        std::env::remove_var("SMTP_PORT");
    }

    #[test]
    fn test_validate_rejects_bad_sender() {
        let config = SmtpConfig {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            sender_address: "not-an-address".to_string(),
            app_password: "secret".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_good_config() {
        let config = SmtpConfig {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            sender_address: "sender@example.com".to_string(),
            app_password: "secret".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
