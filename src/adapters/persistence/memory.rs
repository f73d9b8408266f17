//! Process-local account store.
//!
//! Accounts are lost on restart, suited to development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::OsRng;
use tokio::sync::RwLock;

use crate::domain::{Account, HashedAccountDraft};
use crate::error::Result;
use crate::ports::outbound::AccountStore;

const ID_LENGTH: usize = 24;

/// In-memory [`AccountStore`].
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

#[cfg(test)]
impl MemoryAccountStore {
    /// Look an account up by its identifier.
    pub async fn get(&self, id: &str) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn add(&self, draft: HashedAccountDraft) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        let mut id = Alphanumeric.sample_string(&mut OsRng, ID_LENGTH);
        while accounts.contains_key(&id) {
            id = Alphanumeric.sample_string(&mut OsRng, ID_LENGTH);
        }

        let account = draft.into_account(id.clone());
        accounts.insert(id, account.clone());

        Ok(account)
    }
}
