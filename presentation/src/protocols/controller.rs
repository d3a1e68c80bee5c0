use crate::protocols::http::{HttpRequest, HttpResponse};
use async_trait::async_trait;

/// Turns a request into a response. Failures are part of the response,
/// never an error for the caller.
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Send + 'static;

    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse;
}
