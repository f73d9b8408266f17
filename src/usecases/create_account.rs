//! Account creation use case implementation.

use async_trait::async_trait;

use crate::domain::{Account, AccountDraft, HashedAccountDraft};
use crate::error::Result;
use crate::ports::inbound::CreateAccount;
use crate::ports::outbound::{AccountStore, CredentialHasher};

/// Account creation use case service.
pub struct CreateAccountUseCase {
    hasher: Box<dyn CredentialHasher>,
    account_store: Box<dyn AccountStore>,
}

impl CreateAccountUseCase {
    pub fn new(
        hasher: Box<dyn CredentialHasher>,
        account_store: Box<dyn AccountStore>,
    ) -> Self {
        Self {
            hasher,
            account_store,
        }
    }
}

#[async_trait]
impl CreateAccount for CreateAccountUseCase {
    async fn add(&self, draft: AccountDraft) -> Result<Account> {
        let password_hash = self.hasher.hash(draft.password()).await?;
        let hashed = HashedAccountDraft::new(draft, password_hash);

        let account = self.account_store.add(hashed).await?;
        metrics::counter!("accounts_created_total").increment(1);

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::testing::{AccountStoreSpy, CredentialHasherSpy};

    fn draft() -> AccountDraft {
        AccountDraft::new(
            "valid_name",
            "valid_email@valid_email.com",
            "valid_password",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_hasher_receives_plaintext_password() {
        let hasher = CredentialHasherSpy::default();
        let store = AccountStoreSpy::default();
        let sut = CreateAccountUseCase::new(
            Box::new(hasher.clone()),
            Box::new(store.clone()),
        );

        sut.add(draft()).await.unwrap();

        assert_eq!(hasher.calls(), vec!["valid_password".to_owned()]);
    }

    #[tokio::test]
    async fn test_store_receives_hashed_password() {
        let hasher = CredentialHasherSpy::default();
        let store = AccountStoreSpy::default();
        let sut = CreateAccountUseCase::new(
            Box::new(hasher.clone()),
            Box::new(store.clone()),
        );

        sut.add(draft()).await.unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "valid_name");
        assert_eq!(calls[0].email(), "valid_email@valid_email.com");
        assert_eq!(calls[0].password().as_str(), "hashed_password");
    }

    #[tokio::test]
    async fn test_hasher_failure_skips_store() {
        let hasher = CredentialHasherSpy::failing();
        let store = AccountStoreSpy::default();
        let sut = CreateAccountUseCase::new(
            Box::new(hasher.clone()),
            Box::new(store.clone()),
        );

        let result = sut.add(draft()).await;

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let sut = CreateAccountUseCase::new(
            Box::new(CredentialHasherSpy::default()),
            Box::new(AccountStoreSpy::failing()),
        );

        let result = sut.add(draft()).await;

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }

    #[tokio::test]
    async fn test_returns_store_record_verbatim() {
        let sut = CreateAccountUseCase::new(
            Box::new(CredentialHasherSpy::default()),
            Box::new(AccountStoreSpy::default()),
        );

        let account = sut.add(draft()).await.unwrap();

        assert_eq!(
            account,
            Account {
                id: "valid_id".into(),
                name: "valid_name".into(),
                email: "valid_email@valid_email.com".into(),
                password: "hashed_password".into(),
            }
        );
    }
}
