//! Account store port.

use async_trait::async_trait;

use crate::domain::{Account, HashedAccountDraft};
use crate::error::Result;

/// Port for account persistence.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account.
    ///
    /// Implementations must assign a unique, non-empty identifier.
    async fn add(&self, draft: HashedAccountDraft) -> Result<Account>;
}
