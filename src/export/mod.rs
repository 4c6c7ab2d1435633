//! Rendering and export capabilities injected into controllers.

mod pdf;
mod template;

pub use pdf::ChromiumPdfExporter;
pub use template::TeraTemplateRender;

use crate::controller::ApiError;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

/// Template renderer failure. Display output is surfaced verbatim to callers.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct RenderError(pub String);

/// PDF exporter failure. Display output is surfaced verbatim to callers.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct ExportError(pub String);

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err.0)
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::Export(err.0)
    }
}

/// Renders a named template against a JSON context.
///
/// Implementations must be deterministic for identical inputs.
#[async_trait]
pub trait TemplateRender: Send + Sync {
    async fn render(&self, template_name: &str, context: &Value) -> Result<String, RenderError>;
}

/// Converts HTML markup into a PDF byte stream.
///
/// An empty-but-valid document is a zero-length byte sequence, never an
/// absent value.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, html: &str) -> Result<Bytes, ExportError>;
}
