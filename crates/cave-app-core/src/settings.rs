// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only integer settings port used by exporters at construction time.

use tracing::warn;

use crate::config::{ConfigService, ConfigStore};

/// Narrow, infallible view of the user's settings.
///
/// Implementations return `default` when the key is absent or its value
/// cannot be read; callers never see an error.
pub trait SettingsPort {
    /// Read an integer setting, falling back to `default`.
    fn read_int(&self, key: &str, default: i64) -> i64;
}

impl<S> SettingsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn read_int(&self, key: &str, default: i64) -> i64 {
        match self.load::<i64>(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!(key, %err, default, "unreadable setting, using default");
                default
            }
        }
    }
}

impl<T> SettingsPort for &T
where
    T: SettingsPort + ?Sized,
{
    fn read_int(&self, key: &str, default: i64) -> i64 {
        (**self).read_int(key, default)
    }
}
