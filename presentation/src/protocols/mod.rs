pub mod controller;
pub mod email_validator;
pub mod http;

pub use controller::Controller;
pub use email_validator::EmailValidator;
pub use http::{HttpRequest, HttpResponse, ResponseBody};
