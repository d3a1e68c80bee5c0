use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
    #[error("Internal server error")]
    ServerError(#[from] anyhow::Error),
}

impl ControllerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ControllerError::MissingParam(_) | ControllerError::InvalidParam(_) => 400,
            ControllerError::ServerError(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ControllerError::MissingParam(_) => "missing_param",
            ControllerError::InvalidParam(_) => "invalid_param",
            ControllerError::ServerError(_) => "server_error",
        }
    }

    pub fn param(&self) -> Option<&'static str> {
        match self {
            ControllerError::MissingParam(param) | ControllerError::InvalidParam(param) => {
                Some(*param)
            }
            ControllerError::ServerError(_) => None,
        }
    }
}

// The cause of a server error stays out of the wire format.
impl Serialize for ControllerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ControllerError", 3)?;
        state.serialize_field("kind", self.kind())?;
        match self.param() {
            Some(param) => state.serialize_field("param", param)?,
            None => state.skip_field("param")?,
        }
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
