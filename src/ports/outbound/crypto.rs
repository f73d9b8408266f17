//! Interfaces for cryptographic operations.

use async_trait::async_trait;

use crate::domain::{Password, PasswordHash};
use crate::error::Result;

/// Port for password hashing operations.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash a password using an irreversible algorithm.
    async fn hash(&self, password: &Password) -> Result<PasswordHash>;
}
