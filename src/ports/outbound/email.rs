//! Email syntax checking port.

use crate::error::Result;

/// Port telling whether a string is a well-formed email address.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool>;
}
