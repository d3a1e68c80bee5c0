use crate::errors::ControllerError;
use crate::protocols::{Controller, HttpRequest, HttpResponse, ResponseBody};
use async_trait::async_trait;

/// Reports server errors of the wrapped controller. The response itself is
/// passed through untouched.
pub struct LogControllerDecorator<C> {
    controller: C,
}

impl<C> LogControllerDecorator<C> {
    pub fn new(controller: C) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl<C: Controller> Controller for LogControllerDecorator<C> {
    type Body = C::Body;

    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse {
        let response = self.controller.handle(request).await;
        if let ResponseBody::Error(ControllerError::ServerError(cause)) = &response.body {
            tracing::error!(
                status_code = response.status_code,
                cause = ?cause,
                "request failed with a server error"
            );
        }
        response
    }
}
