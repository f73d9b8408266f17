//! Account and its pre-persistence drafts.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};
use super::password::{Password, PasswordHash};

/// Validated signup payload, before the password is hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    name: String,
    email: String,
    password: Password,
}

impl AccountDraft {
    /// Create a new [`AccountDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] for the first empty field,
    /// checked in the order `name`, `email`, `password`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        let password = Password::new(password);

        if name.is_empty() {
            return Err(DomainError::MissingField { field: "name" });
        }
        if email.is_empty() {
            return Err(DomainError::MissingField { field: "email" });
        }
        if password.is_empty() {
            return Err(DomainError::MissingField { field: "password" });
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Draft whose plaintext password has been replaced by its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedAccountDraft {
    name: String,
    email: String,
    password: PasswordHash,
}

impl HashedAccountDraft {
    /// Build a [`HashedAccountDraft`] from a draft and the hash of its
    /// password. The plaintext is dropped with `draft`.
    pub fn new(draft: AccountDraft, password: PasswordHash) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            password,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    /// Attach the identifier assigned by a store, producing the persisted
    /// [`Account`].
    pub fn into_account(self, id: impl Into<String>) -> Account {
        Account {
            id: id.into(),
            name: self.name,
            email: self.email,
            password: self.password.into_inner(),
        }
    }
}

/// Account as returned by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
