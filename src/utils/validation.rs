use crate::utils::error::{HoroscopeError, Result};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_email(field_name: &str, address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(HoroscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Email address cannot be empty".to_string(),
        });
    }

    match lettre::Address::from_str(address) {
        Ok(_) => Ok(()),
        Err(e) => Err(HoroscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid email address: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HoroscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HoroscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HoroscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| HoroscopeError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HoroscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("smtp.from", "user@example.com").is_ok());
        assert!(validate_email("smtp.from", "jyotishi@gmail.com").is_ok());
        assert!(validate_email("smtp.from", "").is_err());
        assert!(validate_email("smtp.from", "not-an-address").is_err());
        assert!(validate_email("smtp.from", "two@@example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("users", "users.json").is_ok());
        assert!(validate_path("users", "").is_err());
        assert!(validate_path("users", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("smtp.port", 465u16, 1, 65535).is_ok());
        assert!(validate_range("smtp.port", 0u16, 1, 65535).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("smtp.password", &present).is_ok());
        assert!(validate_required_field("smtp.password", &absent).is_err());
    }
}
