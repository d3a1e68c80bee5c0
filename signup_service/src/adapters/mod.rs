mod bcrypt_adapter;
mod email_validator_adapter;
mod in_memory_account_repository;

pub use bcrypt_adapter::BcryptAdapter;
pub use email_validator_adapter::EmailValidatorAdapter;
pub use in_memory_account_repository::InMemoryAccountRepository;
