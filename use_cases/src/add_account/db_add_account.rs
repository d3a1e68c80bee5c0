use crate::add_account::{AddAccount, AddAccountModel};
use async_trait::async_trait;
use entities::accounts::Account;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Account>;
}

pub struct DbAddAccount {
    hasher: Arc<dyn Hasher>,
    repo: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(hasher: Arc<dyn Hasher>, repo: Arc<dyn AddAccountRepository>) -> Self {
        Self { hasher, repo }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[tracing::instrument(err, skip(self, account), fields(email = %account.email), level = "info")]
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Account> {
        let hashed_password = self.hasher.hash(&account.password).await?;

        // the confirmation has done its job by now, it is stored as the same hash
        let account = AddAccountModel {
            password: hashed_password.clone(),
            password_confirmation: hashed_password,
            ..account
        };

        self.repo.add(account).await
    }
}
