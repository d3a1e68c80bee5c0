#[cfg(test)]
use mockall::automock;

/// `Ok(false)` for a malformed address, `Err` when the check itself broke.
#[cfg_attr(test, automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> anyhow::Result<bool>;
}
