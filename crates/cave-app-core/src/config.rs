// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for cave survey exporters.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Where exporter settings live. Each setting key maps to one JSON blob.
pub trait ConfigStore {
    /// Read the blob for `key`; an absent key is [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replace the blob for `key`, creating whatever backing storage it needs.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure reading or writing a saved setting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No value saved under the key.
    #[error("setting not saved")]
    NotFound,
    /// The backing storage could not be read or written.
    #[error("settings storage: {0}")]
    Io(#[from] std::io::Error),
    /// The saved blob is not the JSON the caller asked for.
    #[error("malformed setting value: {0}")]
    Serde(#[from] serde_json::Error),
    /// The store itself is unavailable (e.g. no config directory on this platform).
    #[error("settings unavailable: {0}")]
    Unavailable(String),
}

/// Serializes setting values as JSON and delegates storage to a [`ConfigStore`].
///
/// Exporters read their tunables (date threshold, colour scheme) through the
/// [`SettingsPort`](crate::SettingsPort) impl on this type.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize the value stored under `key`. Returns `Ok(None)` if missing.
    ///
    /// An empty blob counts as missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist `value` under `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStore(RefCell<HashMap<String, Vec<u8>>>);

    impl ConfigStore for MapStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.0.borrow().get(key).cloned().ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.0.borrow_mut().insert(key.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn save_then_load_integer() {
        let svc = ConfigService::new(MapStore::default());
        svc.save("date_threshold", &20_150_101_i64).unwrap();
        assert_eq!(svc.load::<i64>("date_threshold").unwrap(), Some(20_150_101));
    }

    #[test]
    fn missing_and_empty_keys_load_as_none() {
        let svc = ConfigService::new(MapStore::default());
        assert_eq!(svc.load::<i64>("absent").unwrap(), None);
        svc.store().save_raw("blank", b"").unwrap();
        assert_eq!(svc.load::<i64>("blank").unwrap(), None);
    }

    #[test]
    fn garbage_blob_is_a_serde_error() {
        let svc = ConfigService::new(MapStore::default());
        svc.store().save_raw("date_threshold", b"not json").unwrap();
        assert!(matches!(
            svc.load::<i64>("date_threshold"),
            Err(ConfigError::Serde(_))
        ));
    }

    #[test]
    fn errors_describe_the_failing_setting() {
        assert_eq!(ConfigError::NotFound.to_string(), "setting not saved");
        assert_eq!(
            ConfigError::Unavailable("no config directory".into()).to_string(),
            "settings unavailable: no config directory"
        );
        let svc = ConfigService::new(MapStore::default());
        svc.store().save_raw("date_threshold", b"[").unwrap();
        let err = svc.load::<i64>("date_threshold").unwrap_err();
        assert!(err.to_string().starts_with("malformed setting value: "));
    }
}
