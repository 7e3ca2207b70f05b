use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::mapping::ConfigMapping;
use super::sample::sample_mapping;
use crate::error::WebsError;
use crate::fs::{atomic_write, is_regular_file};
use crate::paths;

/// Owns the config file at `~/.web-s.conf` (or `$WEB_S_CONFIG`).
///
/// The file is only ever replaced wholesale: seeded when missing, and
/// deleted and rewritten by [`ConfigStore::reset`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store for the default config location.
    pub fn new() -> Result<Self, WebsError> {
        Ok(Self::at(paths::config_file()?))
    }

    /// Creates a store for an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the config file is present and is a regular file.
    pub fn exists(&self) -> bool {
        // Errors while checking are deliberately not surfaced: an unreadable
        // path counts as missing so the next step writes a usable default.
        is_regular_file(&self.path)
    }

    /// Reads and parses the whole config file.
    pub fn load(&self) -> Result<ConfigMapping, WebsError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| WebsError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;

        ConfigMapping::from_json(&contents).map_err(|source| WebsError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the built-in provider set, overwriting any existing file.
    pub fn write_default(&self) -> Result<(), WebsError> {
        self.save(&sample_mapping())
    }

    /// Writes `mapping` to the config file.
    pub fn save(&self, mapping: &ConfigMapping) -> Result<(), WebsError> {
        let write_err = |source: io::Error| WebsError::ConfigWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = mapping.to_json().map_err(io::Error::from).map_err(write_err)?;
        atomic_write(&self.path, &contents).map_err(write_err)
    }

    /// Deletes the config file if present and writes the built-in providers.
    ///
    /// Any customizations in the old file are lost. There is no prompt.
    pub fn reset(&self) -> Result<(), WebsError> {
        if self.exists() {
            match fs::remove_file(&self.path) {
                // Another process may have removed it in the meantime
                Err(e) if e.kind() != io::ErrorKind::NotFound => {
                    return Err(WebsError::ConfigRemove {
                        path: self.path.clone(),
                        source: e,
                    });
                }
                _ => {}
            }
        }

        self.write_default()
    }

    /// Seeds the default config if no file exists yet.
    ///
    /// Returns `true` if a new file was written.
    pub fn ensure(&self) -> Result<bool, WebsError> {
        if self.exists() {
            return Ok(false);
        }

        self.write_default()?;
        Ok(true)
    }
}
