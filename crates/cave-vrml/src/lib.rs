// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! VRML 2.0 writer for cave survey legs.
//!
//! This crate provides:
//! - [`ThresholdScheme`]: the fixed palette of "newer"/"older" colour pairs
//! - [`ExportConfig`]: date threshold and scheme, resolved from a [`SettingsPort`]
//! - [`VrmlExporter`]: a [`SurveyExporter`] writing one `Shape` per leg
//!
//! Legs surveyed on or after the threshold date get the scheme's `newer`
//! colour; everything else, including legs with no recorded date, gets `older`.
//!
//! [`SettingsPort`]: cave_app_core::SettingsPort
//! [`SurveyExporter`]: cave_export_port::SurveyExporter

mod escape;
mod palette;
mod settings;
mod writer;

pub use escape::{escape_string, write_escaped};
pub use palette::{ColorScheme, Rgb, ThresholdScheme};
pub use settings::{ExportConfig, DATE_THRESHOLD_KEY, DATE_THRESHOLD_SCHEME_KEY};
pub use writer::{SessionState, VrmlExporter, VRML_PASSES};
