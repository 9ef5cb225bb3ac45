use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoroscopeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("SMTP transport error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),

    #[error("Email build error: {0}")]
    EmailError(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Unrecognized zodiac sign: '{value}'")]
    InvalidSignError { value: String },

    #[error("User list error: {message}")]
    UserListError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Data,
    Network,
    System,
}

impl HoroscopeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::System,
            Self::SmtpError(_) => ErrorCategory::Network,
            Self::SerializationError(_)
            | Self::EmailError(_)
            | Self::AddressError(_)
            | Self::InvalidSignError { .. }
            | Self::UserListError { .. } => ErrorCategory::Data,
            Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            // Transient by nature; the next scheduled run retries the batch.
            Self::SmtpError(_) => ErrorSeverity::Medium,
            Self::InvalidSignError { .. } => ErrorSeverity::Low,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the file paths exist and the process has permission to access them"
                    .to_string()
            }
            Self::SerializationError(_) => {
                "Check that the users file contains valid JSON".to_string()
            }
            Self::SmtpError(_) => {
                "Check network connectivity, the SMTP host, and the account credentials; \
                 Gmail requires an app password"
                    .to_string()
            }
            Self::EmailError(_) | Self::AddressError(_) => {
                "Check the sender and recipient email addresses in the configuration and \
                 users file"
                    .to_string()
            }
            Self::InvalidSignError { .. } => {
                "Use one of the twelve zodiac sign names (Aries through Pisces)".to_string()
            }
            Self::UserListError { .. } => {
                "Check that the users file is a JSON array of {name, email, sign} records"
                    .to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::MissingConfigError { field }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("A file could not be read or written: {}", e),
            Self::SerializationError(_) => "The users file is not valid JSON".to_string(),
            Self::SmtpError(_) => "Sending email failed".to_string(),
            Self::EmailError(_) | Self::AddressError(_) => {
                "An email address or message could not be built".to_string()
            }
            Self::InvalidSignError { value } => {
                format!("'{}' is not a recognized zodiac sign", value)
            }
            Self::UserListError { message } => format!("Problem with the users file: {}", message),
            Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => format!("{}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HoroscopeError>;
