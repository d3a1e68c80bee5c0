use crate::errors::ControllerError;
use entities::accounts::Account;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct HttpRequest<B> {
    pub body: B,
}

#[derive(Debug)]
pub enum ResponseBody {
    Account(Account),
    Error(ControllerError),
    Message(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn error(&self) -> Option<&ControllerError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        match &self.body {
            ResponseBody::Account(account) => Some(account),
            _ => None,
        }
    }
}

impl Serialize for ResponseBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseBody::Account(account) => account.serialize(serializer),
            ResponseBody::Error(error) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
            ResponseBody::Message(message) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}
