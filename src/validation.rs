//! Form field validators.

use regex::Regex;

/// Trait for field validators.
pub trait Validator {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("email pattern compiles"),
            message: "Indtast en gyldig emailadresse.".to_string(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new("Udfyld dette felt.");
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate("   ").is_err());
    }

    #[test]
    fn test_required_validator_message() {
        let v = RequiredValidator::new("Udfyld feltet \"Fulde navn\".");
        assert_eq!(v.validate("").unwrap_err(), "Udfyld feltet \"Fulde navn\".");
        assert_eq!(v.message(), "Udfyld feltet \"Fulde navn\".");
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate("user@example.com").is_ok());
        assert!(v.validate("user.name@domain.co.uk").is_ok());
        assert!(v.validate("invalid").is_err());
        assert!(v.validate("@example.com").is_err());
    }

    #[test]
    fn test_regex_validator_digits_only() {
        let v = RegexValidator::new(r"^[0-9]*$", "Må kun indeholde tal.").unwrap();
        assert!(v.validate("12345678").is_ok());
        assert!(v.validate("").is_ok());
        assert!(v.validate("12a3").is_err());
        assert!(v.validate("+4512345678").is_err());
    }

    #[test]
    fn test_regex_validator_rejects_bad_pattern() {
        assert!(RegexValidator::new(r"([0-9]", "broken").is_err());
    }
}
