use crate::errors::ControllerError;
use crate::helpers::http::created;
use crate::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use use_cases::add_account::{AddAccount, AddAccountModel};

/// Every field is optional on the wire so that an absent field can be
/// reported by name instead of failing deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

pub struct SignupController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignupController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn signup(&self, body: SignupRequest) -> Result<HttpResponse, ControllerError> {
        // checked in this order, the first missing field is the one reported
        let name = required("name", body.name)?;
        let email = required("email", body.email)?;
        let password = required("password", body.password)?;
        let password_confirmation = required("passwordConfirmation", body.password_confirmation)?;

        if password != password_confirmation {
            return Err(ControllerError::InvalidParam("passwordConfirmation"));
        }

        if !self.email_validator.is_valid(&email)? {
            return Err(ControllerError::InvalidParam("email"));
        }

        let account = self
            .add_account
            .add(AddAccountModel {
                name,
                email,
                password,
                password_confirmation,
            })
            .await?;

        Ok(created(account))
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ControllerError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ControllerError::MissingParam(field))
}

#[async_trait]
impl Controller for SignupController {
    type Body = SignupRequest;

    #[tracing::instrument(skip_all, level = "info")]
    async fn handle(&self, request: HttpRequest<SignupRequest>) -> HttpResponse {
        self.signup(request.body)
            .await
            .unwrap_or_else(HttpResponse::from)
    }
}
