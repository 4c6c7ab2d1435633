//! # Scorecard - Student Score PDF Export Service
//!
//! Scorecard is a small HTTP service that accepts a JSON payload of students
//! and their scores, validates it, renders it into an HTML report, and
//! returns the report as a PDF document.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    Hyper server loop                      │
//! │         (routing, record conversion — src/runtime)        │
//! └───────────────────────────────────────────────────────────┘
//!                              │ HttpRequest
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │               ExportScorecardController                   │
//! │      validate students → render template → export PDF     │
//! └───────────────────────────────────────────────────────────┘
//!               │                              │
//!               ▼                              ▼
//!      ┌─────────────────┐           ┌──────────────────┐
//!      │ TemplateRender  │           │   PdfExporter    │
//!      │     (tera)      │           │  (chromiumoxide) │
//!      └─────────────────┘           └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scorecard::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = AppConfig::new().port(8000);
//!
//!     let template = Arc::new(TeraTemplateRender::new(&config.template_glob)?);
//!     let exporter = Arc::new(ChromiumPdfExporter::launch().await?);
//!     let controller = Arc::new(ExportScorecardController::new(template, exporter));
//!
//!     Server::new(config, controller).run().await
//! }
//! ```
//!
//! ## Error contract
//!
//! Validation failures (missing or non-coercible fields) come back as HTTP 400,
//! renderer/exporter failures as HTTP 500, both with a `{"error": message}`
//! body. A successful export answers 200 with the raw PDF bytes and
//! `Content-Disposition: inline` so the document opens in the browser.

pub mod controller;
pub mod export;
pub mod http;
pub mod model;
pub mod runtime;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::controller::{ApiError, Controller, ExportScorecardController};
    pub use crate::export::{
        ChromiumPdfExporter, ExportError, PdfExporter, RenderError, TemplateRender,
        TeraTemplateRender,
    };
    pub use crate::http::{HttpRequest, HttpResponse, ResponseBody, StatusCode};
    pub use crate::model::Student;
    pub use crate::runtime::{AppConfig, Server};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use controller::{ApiError, Controller, ExportScorecardController};
pub use export::{PdfExporter, TemplateRender};
pub use http::{HttpRequest, HttpResponse};
pub use model::Student;
pub use runtime::{AppConfig, Server};
