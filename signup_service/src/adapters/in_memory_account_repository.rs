use async_trait::async_trait;
use entities::accounts::{Account, AccountId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use use_cases::add_account::{AddAccountModel, AddAccountRepository};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    pub async fn find(&self, id: AccountId) -> Option<Account> {
        self.accounts.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    #[tracing::instrument(err, skip_all, fields(email = %account.email), level = "debug")]
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Account> {
        let account = Account {
            id: AccountId::new(),
            name: account.name,
            email: account.email,
            password: account.password,
        };

        self.accounts
            .write()
            .await
            .insert(account.id, account.clone());
        tracing::info!(account_id = %account.id, "account stored");

        Ok(account)
    }
}
