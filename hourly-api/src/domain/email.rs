use serde::Serialize;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// A validated, lower-cased email address used as a login name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

#[derive(Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("'{0}' is not a valid email: must contain exactly one '@'")]
    InvalidFormat(String),
    #[error("'{0}' is not a valid email: missing local part")]
    MissingLocalPart(String),
    #[error("'{0}' is not a valid email: invalid domain part")]
    InvalidDomainPart(String),
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(EmailError::InvalidFormat(value.to_string()));
        };

        if domain.contains('@') {
            return Err(EmailError::InvalidFormat(value.to_string()));
        }

        if local.is_empty() {
            return Err(EmailError::MissingLocalPart(value.to_string()));
        }

        if domain.is_empty()
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(EmailError::InvalidDomainPart(value.to_string()));
        }

        Ok(Self(normalized))
    }
}

impl Deref for Email {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        assert!(Email::try_from("asha@example.com").is_ok());
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = Email::try_from("  Admin@GeoDataAR.com ").unwrap();
        assert_eq!(&*email, "admin@geodataar.com");
    }

    #[test]
    fn missing_at_symbol_is_rejected() {
        assert_eq!(
            Email::try_from("ashaexample.com").unwrap_err(),
            EmailError::InvalidFormat("ashaexample.com".to_string())
        );
    }

    #[test]
    fn multiple_at_symbols_are_rejected() {
        assert_eq!(
            Email::try_from("asha@@example.com").unwrap_err(),
            EmailError::InvalidFormat("asha@@example.com".to_string())
        );
    }

    #[test]
    fn missing_local_part_is_rejected() {
        assert_eq!(
            Email::try_from("@example.com").unwrap_err(),
            EmailError::MissingLocalPart("@example.com".to_string())
        );
    }

    #[test]
    fn domain_part_must_contain_dot() {
        assert_eq!(
            Email::try_from("asha@example").unwrap_err(),
            EmailError::InvalidDomainPart("asha@example".to_string())
        );
    }
}
