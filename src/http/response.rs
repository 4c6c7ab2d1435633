//! Outgoing response record built by controllers.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Check if the status code indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Check if the status code indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// Check if the status code indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::OK
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

/// Response payload: structured JSON for errors and plain endpoints, raw
/// bytes for the exported document.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Pdf(Bytes),
}

/// Build the uniform `{error: message}` body.
pub fn error_body(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

/// Controller-level HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status_code: StatusCode,
    /// Response payload.
    pub body: ResponseBody,
    /// HTTP headers, mutable after construction.
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Create a response with the given status and JSON body.
    pub fn new(status_code: impl Into<StatusCode>, body: Value) -> Self {
        Self {
            status_code: status_code.into(),
            body: ResponseBody::Json(body),
            headers: HashMap::new(),
        }
    }

    /// Create a 200 response with a JSON body.
    pub fn success(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Create a 200 response carrying raw PDF bytes.
    pub fn pdf(bytes: impl Into<Bytes>) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: ResponseBody::Pdf(bytes.into()),
            headers: HashMap::new(),
        }
    }

    /// Create a 400 response with a JSON body.
    pub fn bad_request(body: Value) -> Self {
        Self::new(StatusCode::BAD_REQUEST, body)
    }

    /// Create a 404 response with a JSON body.
    pub fn not_found(body: Value) -> Self {
        Self::new(StatusCode::NOT_FOUND, body)
    }

    /// Create a 500 response with a JSON body.
    pub fn internal_server_error(body: Value) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
    }

    /// Add a header to the response.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Whether the response is a success (2xx status).
    pub fn is_ok(&self) -> bool {
        self.status_code.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ok_covers_exactly_the_2xx_range() {
        assert!(!StatusCode(199).is_success());
        assert!(StatusCode(200).is_success());
        assert!(StatusCode(299).is_success());
        assert!(!StatusCode(300).is_success());

        assert!(HttpResponse::success(json!({})).is_ok());
        assert!(!HttpResponse::bad_request(json!({})).is_ok());
        assert!(!HttpResponse::internal_server_error(json!({})).is_ok());
    }

    #[test]
    fn error_body_wraps_the_message() {
        assert_eq!(error_body("boom"), json!({ "error": "boom" }));
    }

    #[test]
    fn headers_are_mutable_after_construction() {
        let mut response = HttpResponse::pdf(Bytes::from_static(b"%PDF"));
        response
            .headers
            .insert("Content-Type".to_string(), "application/pdf".to_string());
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/pdf")
        );
    }
}
