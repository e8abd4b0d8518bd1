//! Persisted downloads configuration.
//!
//! The configuration is a single JSON record holding the root download
//! directory. It lives at a fixed, platform-appropriate per-user path and is
//! re-read from disk by every operation that needs it; nothing is cached in
//! process-global state. Loading is fail-soft: a missing file bootstraps the
//! platform default, and a broken file falls back to it, so callers always
//! receive a usable record.

use crate::error::{DownloadsError, Result};
use crate::paths::ensure_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application subfolder under the platform configuration root.
pub const CONFIG_DIR_NAME: &str = "mdstash";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default downloads folder under the user's documents directory on Windows.
const WINDOWS_DEFAULT_DIR_NAME: &str = "MdstashDownloads";

/// Default dot-folder under the user's home directory elsewhere.
const UNIX_DEFAULT_DIR_NAME: &str = ".mdstash-downloads";

/// The persisted configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadsConfig {
    /// Root directory under which all artifacts and subdirectories live.
    #[serde(rename = "downloadDirectory")]
    pub download_directory: PathBuf,
}

impl DownloadsConfig {
    /// Create a record pointing at the given root directory.
    pub fn new(download_directory: impl Into<PathBuf>) -> Self {
        Self {
            download_directory: download_directory.into(),
        }
    }
}

/// How a loaded configuration record was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the existing configuration file.
    File,

    /// No file existed; a fresh record with the default directory was
    /// written.
    Bootstrapped,

    /// Loading failed; the record was rebuilt from the default directory.
    /// The underlying failure is carried for logging.
    FallbackAfterError { reason: String },
}

/// A configuration record together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: DownloadsConfig,
    pub source: ConfigSource,
}

/// Store for the persisted configuration record.
///
/// The store holds only the two resolved locations (configuration directory
/// and default download directory); the record itself is read from disk on
/// every [`load`](Self::load) so concurrent processes observe each other's
/// writes on their next operation.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_dir: PathBuf,
    config_path: PathBuf,
    default_directory: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform reports no configuration or home
    /// directory; there is no sensible fallback for either.
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir().ok_or(DownloadsError::NoConfigDirectory)?;
        Ok(Self::from_custom_dirs(
            base.join(CONFIG_DIR_NAME),
            default_download_directory()?,
        ))
    }

    /// Create a store with explicit directories.
    ///
    /// Primarily useful for testing with temporary directories.
    pub fn from_custom_dirs(config_dir: PathBuf, default_directory: PathBuf) -> Self {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Self {
            config_dir,
            config_path,
            default_directory,
        }
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Download directory used when no valid record exists.
    pub fn default_directory(&self) -> &Path {
        &self.default_directory
    }

    /// Load the configuration record, bootstrapping or falling back to the
    /// default directory as needed.
    ///
    /// Never fails: any I/O or parse error is logged and converted into a
    /// [`ConfigSource::FallbackAfterError`] record built from the default
    /// directory. The returned record's directory has been created if it was
    /// missing.
    pub fn load(&self) -> LoadedConfig {
        match self.try_load() {
            Ok(loaded) => loaded,
            Err(error) => {
                tracing::warn!(
                    "Failed to load downloads config from {}: {}",
                    self.config_path.display(),
                    error
                );
                if let Err(create_error) = ensure_dir(&self.default_directory) {
                    tracing::warn!(
                        "Failed to create default download directory {}: {}",
                        self.default_directory.display(),
                        create_error
                    );
                }
                LoadedConfig {
                    config: DownloadsConfig::new(&self.default_directory),
                    source: ConfigSource::FallbackAfterError {
                        reason: error.to_string(),
                    },
                }
            }
        }
    }

    /// Persist the given record.
    ///
    /// Failure is logged, not raised: a failed save leaves the persisted
    /// copy stale, and the next [`load`](Self::load) re-reads or re-defaults
    /// rather than crashing the process.
    pub fn save(&self, config: &DownloadsConfig) {
        if let Err(error) = self.try_save(config) {
            tracing::warn!(
                "Failed to save downloads config to {}: {}",
                self.config_path.display(),
                error
            );
        }
    }

    fn try_load(&self) -> Result<LoadedConfig> {
        ensure_dir(&self.config_dir)?;

        if !self.config_path.exists() {
            let config = DownloadsConfig::new(&self.default_directory);
            self.write_record(&config)?;
            ensure_dir(&config.download_directory)?;
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::Bootstrapped,
            });
        }

        let contents = fs::read_to_string(&self.config_path)
            .map_err(|e| DownloadsError::file_read(&self.config_path, e))?;
        let config: DownloadsConfig =
            serde_json::from_str(&contents).map_err(|e| DownloadsError::ConfigFormat {
                path: self.config_path.clone(),
                source: e,
            })?;
        ensure_dir(&config.download_directory)?;

        Ok(LoadedConfig {
            config,
            source: ConfigSource::File,
        })
    }

    fn try_save(&self, config: &DownloadsConfig) -> Result<()> {
        ensure_dir(&self.config_dir)?;
        self.write_record(config)?;
        ensure_dir(&config.download_directory)?;
        Ok(())
    }

    fn write_record(&self, config: &DownloadsConfig) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(config).map_err(|e| DownloadsError::ConfigFormat {
                path: self.config_path.clone(),
                source: e,
            })?;
        fs::write(&self.config_path, contents)
            .map_err(|e| DownloadsError::file_write(&self.config_path, e))
    }
}

/// Compute the platform default download directory.
///
/// Windows uses a `MdstashDownloads` folder under the user's documents
/// directory; every other platform uses `.mdstash-downloads` directly under
/// the home directory.
pub fn default_download_directory() -> Result<PathBuf> {
    if cfg!(windows) {
        let documents = dirs::document_dir().ok_or(DownloadsError::NoHomeDirectory)?;
        Ok(documents.join(WINDOWS_DEFAULT_DIR_NAME))
    } else {
        let home = dirs::home_dir().ok_or(DownloadsError::NoHomeDirectory)?;
        Ok(home.join(UNIX_DEFAULT_DIR_NAME))
    }
}
