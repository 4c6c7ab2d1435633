//! Controller trait and the error type shared across the request pipeline.

use crate::http::{error_body, HttpRequest, HttpResponse};
use async_trait::async_trait;
use thiserror::Error;

/// A request handler behind the transport adapter.
///
/// Controllers never fail at the type level: every error is folded into an
/// [`HttpResponse`] so the transport layer only converts, never decides.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Handle one request and produce the response for it.
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

/// Request pipeline error.
///
/// The two validation variants map to 400, collaborator failures to 500.
/// Display output is the exact text surfaced in the `{error: ...}` body.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// A required field was absent from the payload.
    #[error("Missing param {0}")]
    MissingParam(String),
    /// A field was present but could not be coerced to its target type.
    #[error("{0}")]
    InvalidParam(String),
    /// The template renderer failed.
    #[error("{0}")]
    Render(String),
    /// The PDF exporter failed.
    #[error("{0}")]
    Export(String),
}

impl ApiError {
    /// Whether this error is the caller's fault (maps to 400 rather than 500).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::MissingParam(_) | ApiError::InvalidParam(_))
    }

    /// Fold the error into its terminal HTTP response.
    pub fn into_response(self) -> HttpResponse {
        let body = error_body(self.to_string());
        if self.is_client_error() {
            HttpResponse::bad_request(body)
        } else {
            HttpResponse::internal_server_error(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use serde_json::json;

    #[test]
    fn missing_param_formats_the_field_name() {
        let err = ApiError::MissingParam("students".to_string());
        assert_eq!(err.to_string(), "Missing param students");
        assert!(err.is_client_error());
    }

    #[test]
    fn collaborator_errors_pass_their_message_through_verbatim() {
        let err = ApiError::Render("Server error".to_string());
        assert_eq!(err.to_string(), "Server error");
        assert!(!err.is_client_error());
    }

    #[test]
    fn errors_fold_into_the_matching_response() {
        let response = ApiError::MissingParam("name".to_string()).into_response();
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);

        let response = ApiError::Export("Exporting error".to_string()).into_response();
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body,
            crate::http::ResponseBody::Json(json!({ "error": "Exporting error" }))
        );
    }
}
