//! Path resolution under the configured downloads root.
//!
//! These functions are pure with respect to configuration: they take the
//! current root directory as a plain path and never consult the config store
//! themselves. The only side effects are directory creations needed to
//! guarantee that a resolved path's parent exists before the caller writes.

use crate::error::{DownloadsError, Result};
use crate::naming::artifact_filename;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Validate a user-supplied subdirectory value and return it as a path.
///
/// Accepts only non-empty relative paths made of normal components. Values
/// containing `..`, a root, or a drive prefix would escape the configured
/// root and are rejected.
fn validated_subdirectory(value: &str) -> Result<&Path> {
    let relative = Path::new(value);
    let mut components = relative.components();
    let first = components.next();
    let first_is_normal = matches!(first, Some(Component::Normal(_)));
    let rest_are_normal = components.all(|c| matches!(c, Component::Normal(_)));

    if !first_is_normal || !rest_are_normal {
        return Err(DownloadsError::PathValidation {
            path: relative.to_path_buf(),
        });
    }

    Ok(relative)
}

/// Create a directory and any missing ancestors, idempotently.
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| DownloadsError::directory_creation(path, e))?;
    Ok(())
}

/// Resolve the target path for a download.
///
/// The filename is derived from the URL and today's UTC date. With a
/// subdirectory, the path is `root/subdirectory/filename` and the
/// subdirectory (with missing ancestors) is created before returning;
/// without, the path is `root/filename` and the root is assumed to exist.
/// The artifact file itself is never written here.
pub fn resolve_download_path(
    root: &Path,
    url: &str,
    subdirectory: Option<&str>,
) -> Result<PathBuf> {
    let filename = artifact_filename(url);

    let target_dir = match subdirectory {
        Some(value) => {
            let dir = root.join(validated_subdirectory(value)?);
            ensure_dir(&dir)?;
            dir
        }
        None => root.to_path_buf(),
    };

    Ok(target_dir.join(filename))
}

/// Resolve the directory a listing operation should read.
///
/// Returns `root/subdirectory` when a subdirectory is supplied, else `root`.
/// Existence is not checked: listing a missing directory is the caller's
/// not-found failure, not an empty result.
pub fn resolve_listing_directory(root: &Path, subdirectory: Option<&str>) -> Result<PathBuf> {
    match subdirectory {
        Some(value) => Ok(root.join(validated_subdirectory(value)?)),
        None => Ok(root.to_path_buf()),
    }
}

/// Resolve a named subdirectory under the root, creating it if needed.
///
/// Creation is idempotent: an already-existing directory is a no-op.
pub fn resolve_subdirectory_path(root: &Path, name: &str) -> Result<PathBuf> {
    let dir = root.join(validated_subdirectory(name)?);
    ensure_dir(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::sanitize_url;
    use tempfile::TempDir;

    #[test]
    fn test_download_path_without_subdirectory() {
        let temp = TempDir::new().unwrap();
        let path = resolve_download_path(temp.path(), "https://example.com/a", None).unwrap();

        assert_eq!(path.parent().unwrap(), temp.path());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(&format!("{}-", sanitize_url("https://example.com/a"))));
        assert!(name.ends_with(".md"));
    }

    #[test]
    fn test_download_path_creates_subdirectory() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("docs");
        assert!(!sub.exists());

        let path =
            resolve_download_path(temp.path(), "https://example.com/a", Some("docs")).unwrap();

        assert_eq!(path.parent().unwrap(), sub);
        assert!(sub.is_dir(), "parent must exist after resolution");
    }

    #[test]
    fn test_download_path_creates_nested_subdirectory() {
        let temp = TempDir::new().unwrap();
        let path =
            resolve_download_path(temp.path(), "https://example.com", Some("a/b/c")).unwrap();

        assert_eq!(path.parent().unwrap(), temp.path().join("a/b/c"));
        assert!(temp.path().join("a/b/c").is_dir());
    }

    #[test]
    fn test_download_path_rejects_parent_traversal() {
        let temp = TempDir::new().unwrap();
        let result = resolve_download_path(temp.path(), "https://example.com", Some("../escape"));
        assert!(matches!(
            result,
            Err(DownloadsError::PathValidation { .. })
        ));
    }

    #[test]
    fn test_listing_directory_defaults_to_root() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_listing_directory(temp.path(), None).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn test_listing_directory_joins_subdirectory_without_creating() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_listing_directory(temp.path(), Some("pending")).unwrap();

        assert_eq!(dir, temp.path().join("pending"));
        assert!(!dir.exists(), "listing resolution must not create");
    }

    #[test]
    fn test_listing_directory_rejects_absolute_subdirectory() {
        let temp = TempDir::new().unwrap();
        let result = resolve_listing_directory(temp.path(), Some("/etc"));
        assert!(matches!(
            result,
            Err(DownloadsError::PathValidation { .. })
        ));
    }

    #[test]
    fn test_subdirectory_path_is_created() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_subdirectory_path(temp.path(), "articles").unwrap();

        assert_eq!(dir, temp.path().join("articles"));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_subdirectory_path_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let first = resolve_subdirectory_path(temp.path(), "articles").unwrap();
        let second = resolve_subdirectory_path(temp.path(), "articles").unwrap();

        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn test_subdirectory_rejects_empty_name() {
        let temp = TempDir::new().unwrap();
        let result = resolve_subdirectory_path(temp.path(), "");
        assert!(matches!(
            result,
            Err(DownloadsError::PathValidation { .. })
        ));
    }

    #[test]
    fn test_subdirectory_rejects_embedded_traversal() {
        let temp = TempDir::new().unwrap();
        let result = resolve_subdirectory_path(temp.path(), "ok/../../escape");
        assert!(matches!(
            result,
            Err(DownloadsError::PathValidation { .. })
        ));
    }
}
