//! Argon2id password hasher implementation.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::config::Argon2 as Argon2Config;
use crate::domain::{Password, PasswordHash};
use crate::error::{Result, ToInternal};
use crate::ports::outbound::CredentialHasher;

const OUTPUT_LENGTH: usize = 32;

/// Argon2id password hasher adapter.
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a new Argon2 hasher with custom parameters.
    pub fn new(
        memory_cost: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self> {
        let params = Params::new(
            memory_cost,
            iterations,
            parallelism,
            Some(OUTPUT_LENGTH),
        )
        .catch()?;

        Ok(Self { params })
    }

    pub fn from_config(config: &Argon2Config) -> Result<Self> {
        Self::new(config.memory_cost, config.iterations, config.parallelism)
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash> {
        let params = self.params.clone();
        let password = password.clone();

        // Hashing is CPU bound, keep it off the reactor.
        tokio::task::spawn_blocking(move || {
            let argon2 =
                Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| PasswordHash::new(hash.to_string()))
        })
        .await
        .catch()?
        .catch()
    }
}
