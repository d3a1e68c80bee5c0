pub mod db_add_account;

use async_trait::async_trait;
use entities::accounts::Account;

pub use db_add_account::{AddAccountRepository, DbAddAccount, Hasher};

/// Data forwarded by the signup controller, field for field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Account>;
}
