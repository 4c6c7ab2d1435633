//! Transport-independent HTTP records passed between the server loop and controllers.

mod request;
mod response;

pub use request::HttpRequest;
pub use response::{error_body, HttpResponse, ResponseBody, StatusCode};
