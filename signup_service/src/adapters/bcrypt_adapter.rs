use anyhow::Context;
use async_trait::async_trait;
use use_cases::add_account::Hasher;

pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl Hasher for BcryptAdapter {
    #[tracing::instrument(err, skip_all, fields(cost = self.cost), level = "debug")]
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        // bcrypt blocks for the whole hashing round
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .context("Hashing task failed to complete")?
            .context("Failed to hash password")
    }
}
