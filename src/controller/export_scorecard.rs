//! Scorecard export controller: validate, render, export.

use crate::controller::{ApiError, Controller};
use crate::export::{PdfExporter, TemplateRender};
use crate::http::{HttpRequest, HttpResponse};
use crate::model::Student;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Template rendered for the scorecard document.
pub const SCORECARD_TEMPLATE: &str = "scorecard/index.html";

/// Validate the `students` list of a request.
///
/// A pure gate: success carries no data, the controller re-reads the body when
/// rendering. The first entry that fails construction aborts validation.
pub fn validate_students(request: &HttpRequest) -> Result<(), ApiError> {
    let students = request
        .get("students")
        .ok_or_else(|| ApiError::MissingParam("students".to_string()))?;

    let entries = students
        .as_array()
        .ok_or_else(|| ApiError::InvalidParam("students is not a list".to_string()))?;

    for entry in entries {
        Student::from_value(entry)?;
    }

    Ok(())
}

/// Controller for `POST /scorecard.pdf`.
///
/// Holds its two collaborators behind trait objects so tests can substitute
/// doubles without touching dispatch logic.
pub struct ExportScorecardController {
    template: Arc<dyn TemplateRender>,
    exporter: Arc<dyn PdfExporter>,
}

impl ExportScorecardController {
    /// Create a controller over the given renderer and exporter.
    pub fn new(template: Arc<dyn TemplateRender>, exporter: Arc<dyn PdfExporter>) -> Self {
        Self { template, exporter }
    }

    async fn make_pdf(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        validate_students(request)?;

        let context = Value::Object(request.body.clone());
        let html = self.template.render(SCORECARD_TEMPLATE, &context).await?;
        let pdf = self.exporter.export(&html).await?;

        debug!(bytes = pdf.len(), "scorecard exported");

        Ok(HttpResponse::pdf(pdf)
            .header("Content-Type", "application/pdf")
            .header("Content-Disposition", "inline"))
    }
}

#[async_trait]
impl Controller for ExportScorecardController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.make_pdf(&request).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with(body: Value) -> HttpRequest {
        match body {
            Value::Object(map) => HttpRequest::new(map),
            _ => HttpRequest::empty(),
        }
    }

    #[test]
    fn missing_students_fails_validation() {
        let err = validate_students(&HttpRequest::empty()).unwrap_err();
        assert_eq!(err, ApiError::MissingParam("students".to_string()));
    }

    #[test]
    fn non_list_students_fails_validation() {
        let request = request_with(json!({ "students": "User1" }));
        assert!(matches!(
            validate_students(&request).unwrap_err(),
            ApiError::InvalidParam(_)
        ));
    }

    #[test]
    fn first_invalid_entry_aborts_validation() {
        let request = request_with(json!({
            "students": [
                { "name": "User1", "score1": 1.0, "score2": 2.0, "score3": 3.0, "mean": 2.0 },
                { "score1": 1.0, "score2": 2.0, "score3": 3.0, "mean": 2.0 }
            ]
        }));
        let err = validate_students(&request).unwrap_err();
        assert_eq!(err, ApiError::MissingParam("name".to_string()));
    }

    #[test]
    fn empty_students_list_is_accepted() {
        let request = request_with(json!({ "students": [] }));
        assert!(validate_students(&request).is_ok());
    }
}
