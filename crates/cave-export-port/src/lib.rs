// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Export port contract for cave survey writers.
//!
//! This crate defines the contract between the survey traversal and the
//! individual output formats. It contains NO format logic; writers such as
//! `cave-vrml` implement [`SurveyExporter`].
//!
//! # Design Principles
//!
//! - **Writers are dumb**: they receive legs one at a time and write them.
//! - **No buffering**: every leg is handed over as soon as the traversal reaches it.
//! - **Context before geometry**: the leg date is set before each leg is drawn.

use thiserror::Error;

/// Error raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output sink rejected a write.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised while reading a survey document.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The document could not be read.
    #[error("could not read survey: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not a valid survey JSON document.
    #[error("malformed survey: {0}")]
    Json(#[from] serde_json::Error),
}

mod port;
mod survey;
mod traverse;
mod types;

pub use port::SurveyExporter;
pub use survey::{Leg, LegKind, Station, Survey};
pub use traverse::export_survey;
pub use types::{Bounds3, ExportPasses, HeaderInfo, LegDate, LegFlags, Point3};
