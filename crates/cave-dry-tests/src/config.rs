// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory settings fakes for testing without filesystem I/O.

use cave_app_core::config::{ConfigError, ConfigStore};
use cave_app_core::SettingsPort;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share the same backing map, so a test can keep a handle while the
/// store itself is moved into a `ConfigService`. Load attempts are counted.
///
/// # Example
///
/// ```
/// use cave_dry_tests::InMemoryConfigStore;
/// use cave_app_core::{ConfigService, SettingsPort};
///
/// let store = InMemoryConfigStore::with_ints(&[("date_threshold", 20_000)]);
/// let service = ConfigService::new(store.clone());
///
/// assert_eq!(service.read_int("date_threshold", 0), 20_000);
/// assert_eq!(service.read_int("date_threshold_scheme", 0), 0);
/// assert_eq!(store.load_count(), 2);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    fail_on_load: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty in-memory config store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding each `(key, value)` as a JSON integer.
    pub fn with_ints(entries: &[(&str, i64)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.put_raw(key, value.to_string().as_bytes());
        }
        store
    }

    /// Store `data` verbatim under `key` (use it to plant malformed values).
    pub fn put_raw(&self, key: &str, data: &[u8]) {
        self.lock().data.insert(key.to_string(), data.to_vec());
    }

    /// Make every subsequent load fail with `ConfigError::Unavailable`.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Number of `load_raw` attempts so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Check if a key exists in the store.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(ConfigError::Unavailable("simulated load failure".into()));
        }

        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.put_raw(key, data);
        Ok(())
    }
}

/// [`SettingsPort`] backed by a plain map; keys not in the map read as the default.
#[derive(Clone, Debug, Default)]
pub struct FixedSettings {
    values: HashMap<String, i64>,
}

impl FixedSettings {
    /// Settings holding exactly `entries`.
    pub fn new(entries: &[(&str, i64)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), *v))
                .collect(),
        }
    }

    /// The usual pair of exporter settings.
    pub fn threshold(date_threshold: i64, scheme: i64) -> Self {
        Self::new(&[
            ("date_threshold", date_threshold),
            ("date_threshold_scheme", scheme),
        ])
    }
}

impl SettingsPort for FixedSettings {
    fn read_int(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).copied().unwrap_or(default)
    }
}
