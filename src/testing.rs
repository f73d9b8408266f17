//! Test doubles for the outbound and inbound ports.
//!
//! MUST NEVER be used in production.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    Account, AccountDraft, HashedAccountDraft, Password, PasswordHash,
};
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::CreateAccount;
use crate::ports::outbound::{AccountStore, CredentialHasher, EmailValidator};

fn failure(what: &str) -> ApplicationError {
    ApplicationError::internal(std::io::Error::other(format!("{what} failed")))
}

/// Outcome an [`EmailValidatorSpy`] reports.
#[derive(Clone, Copy, Debug, Default)]
pub enum Verdict {
    #[default]
    Valid,
    Invalid,
    Fail,
}

/// Records every email it is asked about.
#[derive(Clone, Default)]
pub struct EmailValidatorSpy {
    verdict: Verdict,
    calls: Arc<Mutex<Vec<String>>>,
}

impl EmailValidatorSpy {
    pub fn with(verdict: Verdict) -> Self {
        Self {
            verdict,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmailValidator for EmailValidatorSpy {
    fn is_valid(&self, email: &str) -> Result<bool> {
        self.calls.lock().unwrap().push(email.to_owned());

        match self.verdict {
            Verdict::Valid => Ok(true),
            Verdict::Invalid => Ok(false),
            Verdict::Fail => Err(failure("email validator")),
        }
    }
}

/// Returns `hashed_password` for any input.
#[derive(Clone, Default)]
pub struct CredentialHasherSpy {
    fail: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl CredentialHasherSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialHasher for CredentialHasherSpy {
    async fn hash(&self, password: &Password) -> Result<PasswordHash> {
        self.calls.lock().unwrap().push(password.as_str().to_owned());

        if self.fail {
            return Err(failure("hasher"));
        }
        Ok(PasswordHash::new("hashed_password"))
    }
}

/// Echoes the draft back with id `valid_id`.
#[derive(Clone, Default)]
pub struct AccountStoreSpy {
    fail: bool,
    calls: Arc<Mutex<Vec<HashedAccountDraft>>>,
}

impl AccountStoreSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<HashedAccountDraft> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountStore for AccountStoreSpy {
    async fn add(&self, draft: HashedAccountDraft) -> Result<Account> {
        self.calls.lock().unwrap().push(draft.clone());

        if self.fail {
            return Err(failure("account store"));
        }
        Ok(draft.into_account("valid_id"))
    }
}

/// Returns a fixed account without touching any collaborator.
#[derive(Clone, Default)]
pub struct CreateAccountSpy {
    fail: bool,
    calls: Arc<Mutex<Vec<AccountDraft>>>,
}

impl CreateAccountSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<AccountDraft> {
        self.calls.lock().unwrap().clone()
    }

    pub fn account() -> Account {
        Account {
            id: "valid_id".into(),
            name: "valid_name".into(),
            email: "valid_email@valid_email.com".into(),
            password: "valid_password".into(),
        }
    }
}

#[async_trait]
impl CreateAccount for CreateAccountSpy {
    async fn add(&self, draft: AccountDraft) -> Result<Account> {
        self.calls.lock().unwrap().push(draft);

        if self.fail {
            return Err(failure("create account"));
        }
        Ok(Self::account())
    }
}
