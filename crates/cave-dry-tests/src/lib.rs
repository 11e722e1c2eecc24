// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for cave survey export crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake and fixed settings map
//! - [`recorder`] - Exporter that records every call it receives
//! - [`surveys`] - Small survey documents for traversal and writer tests

pub mod config;
pub mod recorder;
pub mod surveys;

pub use config::{FixedSettings, InMemoryConfigStore};
pub use recorder::{ExportCall, RecordingExporter};
pub use surveys::{leg, survey_with_legs, three_kinds_survey, LegBuilder};
