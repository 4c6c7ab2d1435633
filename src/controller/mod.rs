//! Controller dispatch: validation gate in front of the render/export pipeline.

pub mod export_scorecard;
pub mod handler;

pub use export_scorecard::ExportScorecardController;
pub use handler::{ApiError, Controller};
