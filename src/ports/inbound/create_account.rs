//! Account creation use case port.

use async_trait::async_trait;

use crate::domain::{Account, AccountDraft};
use crate::error::Result;

/// Inbound port for account creation.
#[async_trait]
pub trait CreateAccount: Send + Sync {
    /// Hash the draft's password then persist it, returning the stored
    /// record.
    async fn add(&self, draft: AccountDraft) -> Result<Account>;
}
