use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::smtp::{SmtpConfig, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::{HoroscopeError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_path, validate_range,
    validate_required_field, Validate,
};

/// Job file for scheduled runs. `${VAR}` placeholders in string values are
/// replaced from the environment before parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub job: JobSection,
    pub users: UsersSection,
    pub smtp: Option<SmtpSection>,
    pub delivery: Option<DeliverySection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpSection {
    pub sender_address: Option<String>,
    pub app_password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySection {
    pub dry_run: Option<bool>,
    pub outbox_path: Option<String>,
    /// Fixed date (YYYY-MM-DD) for reproducible runs.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl JobConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HoroscopeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HoroscopeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables
    /// are left in place for validation to flag.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_path("users.path", &self.users.path)?;

        if let Some(smtp) = &self.smtp {
            if let Some(sender) = &smtp.sender_address {
                validate_email("smtp.sender_address", sender)?;
            }
            if let Some(port) = smtp.port {
                validate_range("smtp.port", port, 1, u16::MAX)?;
            }
        }

        if let Some(delivery) = &self.delivery {
            if let Some(outbox) = &delivery.outbox_path {
                validate_path("delivery.outbox_path", outbox)?;
            }
            if let Some(date) = &delivery.date {
                date.parse::<NaiveDate>().map_err(|_| {
                    HoroscopeError::InvalidConfigValueError {
                        field: "delivery.date".to_string(),
                        value: date.clone(),
                        reason: "expected YYYY-MM-DD".to_string(),
                    }
                })?;
            }
        }

        Ok(())
    }

    /// SMTP settings from the `[smtp]` section, falling back to the
    /// environment when the section is absent.
    pub fn smtp_config(&self) -> Result<SmtpConfig> {
        match &self.smtp {
            Some(section) => {
                let sender =
                    validate_required_field("smtp.sender_address", &section.sender_address)?;
                let password =
                    validate_required_field("smtp.app_password", &section.app_password)?;

                Ok(SmtpConfig {
                    host: section
                        .host
                        .clone()
                        .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                    port: section.port.unwrap_or(DEFAULT_SMTP_PORT),
                    sender_address: sender.clone(),
                    app_password: password.clone(),
                })
            }
            None => SmtpConfig::from_env(),
        }
    }

    pub fn dry_run(&self) -> bool {
        self.delivery
            .as_ref()
            .and_then(|d| d.dry_run)
            .unwrap_or(false)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref()?.log_level.as_deref()
    }
}

impl ConfigProvider for JobConfig {
    fn users_path(&self) -> &str {
        &self.users.path
    }

    fn outbox_path(&self) -> &str {
        self.delivery
            .as_ref()
            .and_then(|d| d.outbox_path.as_deref())
            .unwrap_or("./outbox")
    }

    fn target_date(&self) -> Option<NaiveDate> {
        // validate_config guarantees the string parses.
        self.delivery.as_ref()?.date.as_ref()?.parse().ok()
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_job_config() {
        let toml_content = r#"
[job]
name = "daily-horoscope"
description = "Daily horoscope mail job"
version = "1.0.0"

[users]
path = "users.json"

[smtp]
sender_address = "sender@example.com"
app_password = "app-password"

[delivery]
dry_run = true
outbox_path = "./outbox"
date = "2024-01-11"
"#;

        let config = JobConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job.name, "daily-horoscope");
        assert_eq!(config.users_path(), "users.json");
        assert!(config.dry_run());
        assert_eq!(
            config.target_date(),
            NaiveDate::from_ymd_opt(2024, 1, 11)
        );
        assert!(config.validate().is_ok());

        let smtp = config.smtp_config().unwrap();
        assert_eq!(smtp.host, DEFAULT_SMTP_HOST);
        assert_eq!(smtp.port, DEFAULT_SMTP_PORT);
        assert_eq!(smtp.sender_address, "sender@example.com");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_JOB_SENDER", "env-sender@example.com");

        let toml_content = r#"
[job]
name = "test"
description = "test"
version = "1.0"

[users]
path = "users.json"

[smtp]
sender_address = "${TEST_JOB_SENDER}"
app_password = "secret"
"#;

        let config = JobConfig::from_toml_str(toml_content).unwrap();
        let smtp = config.smtp_config().unwrap();
        assert_eq!(smtp.sender_address, "env-sender@example.com");

        std::env::remove_var("TEST_JOB_SENDER");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[job]
name = "test"
description = "test"
version = "1.0"

[users]
path = "users.json"

[smtp]
sender_address = "${UNSET_SENDER_VARIABLE}"
app_password = "secret"
"#;

        let config = JobConfig::from_toml_str(toml_content).unwrap();
        // The placeholder survives substitution and is not a valid address.
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_delivery_date_fails_validation() {
        let toml_content = r#"
[job]
name = "test"
description = "test"
version = "1.0"

[users]
path = "users.json"

[delivery]
date = "11-01-2024"
"#;

        let config = JobConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_smtp_credentials_in_section() {
        let toml_content = r#"
[job]
name = "test"
description = "test"
version = "1.0"

[users]
path = "users.json"

[smtp]
host = "mail.example.com"
"#;

        let config = JobConfig::from_toml_str(toml_content).unwrap();
        let err = config.smtp_config().unwrap_err();
        assert!(matches!(err, HoroscopeError::MissingConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[job]
name = "file-test"
description = "File test"
version = "1.0"

[users]
path = "users.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = JobConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job.name, "file-test");
        assert_eq!(config.outbox_path(), "./outbox");
        assert_eq!(config.target_date(), None);
    }
}
