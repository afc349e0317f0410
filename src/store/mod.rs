//! Baseline Store
//!
//! Durable path-to-digest persistence. One baseline per store; keys are
//! portable relative paths, values are content digests.

pub mod persistence;

pub use persistence::SledBaselineStore;

use crate::error::StorageError;
use crate::types::{Baseline, Digest};

/// Durable mapping from relative path to content digest.
pub trait BaselineStore {
    /// Insert or replace the digest for a path. Atomic per call.
    fn upsert(&self, path: &str, digest: &Digest) -> Result<(), StorageError>;

    /// Read the entire store into memory. An empty store yields an empty
    /// baseline, never an error.
    fn load_all(&self) -> Result<Baseline, StorageError>;

    /// Durability barrier: pending upserts survive process exit once this
    /// returns.
    fn flush(&self) -> Result<(), StorageError>;
}
