use serde::Serialize;
use shared_kernel::uuid_key;

uuid_key!(AccountId);

/// A registered account. `password` holds whatever the persistence side
/// stored, normally a hash, and is never serialized.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
