// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` (one JSON file per setting key).

use cave_app_core::config::{ConfigError, ConfigStore};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store settings as JSON files under a base directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/cave-export`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("org", "cave-export", "cave-export")
            .ok_or_else(|| ConfigError::Unavailable("no user config directory".into()))?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Create a store rooted at `base`.
    ///
    /// Nothing is created on disk until the first save; a missing directory
    /// reads as [`ConfigError::NotFound`] for every key.
    pub fn at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_path_buf();
        debug!(base = %base.display(), "opened config store");
        Self { base }
    }

    /// Directory the store reads from and writes to.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}
