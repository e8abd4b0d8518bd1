//! Download directory configuration, path resolution, and artifact naming.
//!
//! This crate is the core of mdstash: it owns the persisted settings record
//! (the root download directory), resolves safe absolute paths for artifacts
//! and subdirectories under that root, and derives collision-resistant
//! artifact filenames from URLs.
//!
//! # Overview
//!
//! Three responsibilities, layered so that path resolution never depends on
//! the store itself:
//!
//! - [`ConfigStore`] - bootstrap, load, and save of the configuration record
//! - [`resolve_download_path`] / [`resolve_listing_directory`] /
//!   [`resolve_subdirectory_path`] - pure path resolution over a supplied root
//! - [`sanitize_url`] / [`artifact_filename`] - URL to filename derivation
//!
//! # Example
//!
//! ```no_run
//! use mdstash_downloads::{resolve_download_path, ConfigStore};
//!
//! let store = ConfigStore::new()?;
//! let loaded = store.load();
//! let target = resolve_download_path(
//!     &loaded.config.download_directory,
//!     "https://example.com/a",
//!     Some("docs"),
//! )?;
//! println!("artifact goes to {}", target.display());
//! # Ok::<(), mdstash_downloads::DownloadsError>(())
//! ```

mod config;
mod error;
mod naming;
mod paths;

// Re-export main types
pub use config::{
    default_download_directory, ConfigSource, ConfigStore, DownloadsConfig, LoadedConfig,
    CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{DownloadsError, Result};
pub use naming::{artifact_filename, artifact_filename_on, sanitize_url};
pub use paths::{resolve_download_path, resolve_listing_directory, resolve_subdirectory_path};
