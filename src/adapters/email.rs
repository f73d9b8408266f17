//! Email syntax checker backed by the `validator` crate.

use validator::ValidateEmail;

use crate::error::Result;
use crate::ports::outbound::EmailValidator;

/// HTML5-compliant email syntax check.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(EmailValidatorAdapter.is_valid("valid_email@gmail.com").unwrap());
        assert!(EmailValidatorAdapter.is_valid("any.name+tag@example.org").unwrap());
    }

    #[test]
    fn test_underscore_in_domain_is_rejected() {
        assert!(
            !EmailValidatorAdapter
                .is_valid("valid_email@valid_email.com")
                .unwrap()
        );
    }

    #[test]
    fn test_invalid_email() {
        assert!(!EmailValidatorAdapter.is_valid("invalid_email").unwrap());
        assert!(!EmailValidatorAdapter.is_valid("a@b@c.com").unwrap());
        assert!(!EmailValidatorAdapter.is_valid("@gmail.com").unwrap());
    }
}
