use crate::errors::ControllerError;
use crate::protocols::http::{HttpResponse, ResponseBody};
use entities::accounts::Account;

pub fn bad_request(error: ControllerError) -> HttpResponse {
    HttpResponse {
        status_code: 400,
        body: ResponseBody::Error(error),
    }
}

pub fn server_error(cause: anyhow::Error) -> HttpResponse {
    HttpResponse {
        status_code: 500,
        body: ResponseBody::Error(ControllerError::ServerError(cause)),
    }
}

pub fn created(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: 201,
        body: ResponseBody::Account(account),
    }
}

pub fn ok(message: impl Into<String>) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        body: ResponseBody::Message(message.into()),
    }
}

impl From<ControllerError> for HttpResponse {
    fn from(error: ControllerError) -> Self {
        match error {
            ControllerError::ServerError(cause) => server_error(cause),
            client_error => bad_request(client_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{created, ok};
    use crate::errors::ControllerError;
    use crate::protocols::http::{HttpResponse, ResponseBody};
    use anyhow::anyhow;
    use entities::accounts::{Account, AccountId};

    #[test]
    fn test_errors_become_responses_with_their_status() {
        let response = HttpResponse::from(ControllerError::MissingParam("name"));
        assert_eq!(response.status_code, 400);
        assert!(matches!(
            response.error(),
            Some(ControllerError::MissingParam("name"))
        ));

        let response = HttpResponse::from(ControllerError::from(anyhow!("boom")));
        assert_eq!(response.status_code, 500);
        assert!(matches!(
            response.error(),
            Some(ControllerError::ServerError(_))
        ));
    }

    #[test]
    fn test_success_helpers() {
        let account = Account {
            id: AccountId::new(),
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "valid_password".to_string(),
        };

        let response = created(account.clone());
        assert_eq!(response.status_code, 201);
        assert_eq!(response.account(), Some(&account));

        let response = ok("pong");
        assert_eq!(response.status_code, 200);
        assert!(matches!(response.body, ResponseBody::Message(ref message) if message == "pong"));
    }
}
