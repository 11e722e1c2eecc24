// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for cave survey exporters.
//!
//! The exporters never reach into a global config singleton; they receive a
//! [`settings::SettingsPort`] at construction time. [`config::ConfigService`]
//! adapts any [`config::ConfigStore`] backend into that port.

pub mod config;
pub mod settings;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use settings::SettingsPort;
