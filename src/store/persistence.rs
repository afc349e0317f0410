//! Sled-backed baseline store

use crate::error::StorageError;
use crate::store::BaselineStore;
use crate::types::{Baseline, Digest, DIGEST_LEN};
use sled;
use std::path::Path;

/// Sled-based implementation of `BaselineStore`.
///
/// Keys are the UTF-8 bytes of the relative path, values the raw 32-byte
/// digest. Sled gives the schema contract the baseline format requires:
/// unique keys, insert-or-replace writes, full-table iteration.
pub struct SledBaselineStore {
    db: sled::Db,
}

impl SledBaselineStore {
    /// Open or create a baseline store at the given path.
    ///
    /// Idempotent: opening an existing, compatible store preserves its
    /// contents. An existing path that is not a recognizable store is a
    /// `StoreFormat` error; an uncreatable or unwritable path is
    /// `StoreUnavailable`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|e| match e {
            sled::Error::Corruption { .. } | sled::Error::Unsupported(_) => {
                StorageError::StoreFormat(format!("{}: {}", path.display(), e))
            }
            other => StorageError::StoreUnavailable {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })?;
        Ok(Self { db })
    }
}

impl BaselineStore for SledBaselineStore {
    fn upsert(&self, path: &str, digest: &Digest) -> Result<(), StorageError> {
        self.db
            .insert(path.as_bytes(), digest.as_slice())
            .map_err(|e| {
                StorageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to upsert {:?}: {}", path, e),
                ))
            })?;
        Ok(())
    }

    fn load_all(&self) -> Result<Baseline, StorageError> {
        let mut baseline = Baseline::new();
        for item in self.db.iter() {
            let (key, value) = item.map_err(|e| {
                StorageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to iterate store: {}", e),
                ))
            })?;

            let path = std::str::from_utf8(&key)
                .map_err(|_| {
                    StorageError::StoreFormat("Store key is not valid UTF-8".to_string())
                })?
                .to_string();

            let digest: Digest = value.as_ref().try_into().map_err(|_| {
                StorageError::StoreFormat(format!(
                    "Value for {:?} is not a {}-byte digest",
                    path, DIGEST_LEN
                ))
            })?;

            baseline.insert(path, digest);
        }
        Ok(baseline)
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to flush store: {}", e),
            ))
        })?;
        Ok(())
    }
}
