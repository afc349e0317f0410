//! Root canonicalization and portable relative paths

use crate::error::StorageError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a scan root for consistent prefix stripping.
///
/// Uses dunce so Windows paths come back without the `\\?\` prefix. Fails
/// if the path does not exist.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, StorageError> {
    dunce::canonicalize(root).map_err(|e| {
        StorageError::InvalidPath(format!("Failed to canonicalize {:?}: {}", root, e))
    })
}

/// Express `file_path` relative to `root` as a portable baseline key:
/// forward-slash separators on every platform, Unicode normalized to NFC.
///
/// Non-UTF-8 components and paths outside the root are `InvalidPath`
/// errors; the builder treats those like any other per-file failure.
pub fn relative_to(root: &Path, file_path: &Path) -> Result<String, StorageError> {
    let rel = file_path.strip_prefix(root).map_err(|_| {
        StorageError::InvalidPath(format!("{:?} is not under root {:?}", file_path, root))
    })?;

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    StorageError::InvalidPath(format!("Non-UTF-8 path component in {:?}", rel))
                })?;
                parts.push(name.nfc().collect::<String>());
            }
            other => {
                return Err(StorageError::InvalidPath(format!(
                    "Unexpected path component {:?} in {:?}",
                    other, rel
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(StorageError::InvalidPath(format!(
            "{:?} resolves to the root itself",
            file_path
        )));
    }

    Ok(parts.join("/"))
}
