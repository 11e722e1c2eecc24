// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Resolution of the exporter's two tunables.

use cave_app_core::SettingsPort;
use tracing::debug;

use crate::palette::ThresholdScheme;

/// Settings key holding the threshold day number.
pub const DATE_THRESHOLD_KEY: &str = "date_threshold";
/// Settings key holding the colour scheme index.
pub const DATE_THRESHOLD_SCHEME_KEY: &str = "date_threshold_scheme";

/// Resolved exporter settings. Immutable once built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// Legs dated on or after this day are "newer".
    pub date_threshold: i32,
    /// Active colour scheme.
    pub scheme: ThresholdScheme,
}

impl ExportConfig {
    /// Build a config directly.
    pub const fn new(date_threshold: i32, scheme: ThresholdScheme) -> Self {
        Self {
            date_threshold,
            scheme,
        }
    }

    /// Read both settings, defaulting each to 0 and clamping the scheme.
    ///
    /// With no settings provider this is [`ExportConfig::default`]. Never fails.
    pub fn resolve(settings: Option<&dyn SettingsPort>) -> Self {
        let Some(settings) = settings else {
            debug!("no settings provider, using defaults");
            return Self::default();
        };

        let raw_threshold = settings.read_int(DATE_THRESHOLD_KEY, 0);
        let date_threshold = i32::try_from(raw_threshold)
            .unwrap_or(if raw_threshold < 0 { i32::MIN } else { i32::MAX });

        let raw_scheme = settings.read_int(DATE_THRESHOLD_SCHEME_KEY, 0);
        let scheme = ThresholdScheme::from_index_clamped(raw_scheme);
        if usize::try_from(raw_scheme).ok() != Some(scheme.index()) {
            debug!(raw_scheme, clamped = scheme.index(), "scheme index out of range");
        }

        debug!(date_threshold, scheme = scheme.index(), "resolved export settings");
        Self {
            date_threshold,
            scheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pairs(&'static [(&'static str, i64)]);

    impl SettingsPort for Pairs {
        fn read_int(&self, key: &str, default: i64) -> i64 {
            self.0
                .iter()
                .find(|(k, _)| *k == key)
                .map_or(default, |(_, v)| *v)
        }
    }

    #[test]
    fn no_provider_means_zero_and_first_scheme() {
        let cfg = ExportConfig::resolve(None);
        assert_eq!(cfg.date_threshold, 0);
        assert_eq!(cfg.scheme, ThresholdScheme::RedBlue);
    }

    #[test]
    fn empty_provider_means_defaults() {
        assert_eq!(ExportConfig::resolve(Some(&Pairs(&[]))), ExportConfig::default());
    }

    #[test]
    fn scheme_is_clamped() {
        let high = ExportConfig::resolve(Some(&Pairs(&[("date_threshold_scheme", 99)])));
        assert_eq!(high.scheme.index(), 3);
        let low = ExportConfig::resolve(Some(&Pairs(&[("date_threshold_scheme", -5)])));
        assert_eq!(low.scheme.index(), 0);
    }

    #[test]
    fn threshold_saturates_to_i32() {
        let big = ExportConfig::resolve(Some(&Pairs(&[("date_threshold", i64::MAX)])));
        assert_eq!(big.date_threshold, i32::MAX);
        let small = ExportConfig::resolve(Some(&Pairs(&[("date_threshold", i64::MIN)])));
        assert_eq!(small.date_threshold, i32::MIN);
        let plain = ExportConfig::resolve(Some(&Pairs(&[("date_threshold", 44_000)])));
        assert_eq!(plain.date_threshold, 44_000);
    }
}
