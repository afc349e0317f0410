//! Baseline builder: walk, hash, persist

use crate::error::StorageError;
use crate::store::BaselineStore;
use crate::tree::walker::Walker;
use crate::tree::{hasher, path};
use crate::types::Digest;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Per-file completion observer: called with the relative path and the
/// digest, or `None` when the file was skipped as unreadable. Invoked from
/// hashing worker threads, so implementations must be thread-safe.
pub type ProgressFn = dyn Fn(&str, Option<&Digest>) + Send + Sync;

/// Outcome of a baseline build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Files hashed and recorded in the store.
    pub hashed: usize,
    /// Files skipped because they could not be read or keyed.
    pub skipped: usize,
}

/// Orchestrates Walker and Hasher to populate a baseline store.
///
/// Enumeration completes before any hashing starts; hashing runs across a
/// worker pool; store writes are serialized on the calling thread and
/// flushed once after the last upsert. An interrupted build leaves a
/// partial baseline behind, which compares as missing/extra rather than
/// erroring.
pub struct BaselineBuilder {
    root: PathBuf,
    chunk_size: usize,
    workers: Option<usize>,
    progress: Option<Box<ProgressFn>>,
}

impl BaselineBuilder {
    /// Create a builder for the given scan root.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            chunk_size: hasher::DEFAULT_CHUNK_SIZE,
            workers: None,
            progress: None,
        }
    }

    /// Override the streaming read size (tests use tiny chunks).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Bound the hashing worker pool. `None` uses the global rayon pool.
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Install a per-file completion observer.
    pub fn with_progress(mut self, progress: Box<ProgressFn>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Build the baseline into `store`.
    ///
    /// Fatal errors: root missing or not a directory (before any hashing),
    /// and any store write failure. Per-file read failures are skipped and
    /// counted, never fatal.
    #[instrument(skip(self, store), fields(root = %self.root.display()))]
    pub fn build(&self, store: &dyn BaselineStore) -> Result<BuildReport, StorageError> {
        let start = Instant::now();

        // A zero chunk size would make hash_file fail for every file, which
        // the skip path would turn into an all-skipped "success". Fail the
        // whole build instead, before anything is walked or written.
        if self.chunk_size == 0 {
            return Err(StorageError::InvalidChunkSize(self.chunk_size));
        }

        let root = path::canonicalize_root(&self.root)?;
        let files = Walker::new(root.clone()).list_files()?;
        info!(file_count = files.len(), "Enumerated files");

        let hash_one = |file: &PathBuf| -> (String, Option<Digest>) {
            let rel = match path::relative_to(&root, file) {
                Ok(rel) => rel,
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "Skipping file with unusable path");
                    let display = file.display().to_string();
                    if let Some(cb) = &self.progress {
                        cb(&display, None);
                    }
                    return (display, None);
                }
            };
            match hasher::hash_file(file, self.chunk_size) {
                Ok(digest) => {
                    debug!(path = %rel, digest = %hex::encode(digest), "Hashed file");
                    if let Some(cb) = &self.progress {
                        cb(&rel, Some(&digest));
                    }
                    (rel, Some(digest))
                }
                Err(e) => {
                    warn!(path = %rel, error = %e, "Skipping unreadable file");
                    if let Some(cb) = &self.progress {
                        cb(&rel, None);
                    }
                    (rel, None)
                }
            }
        };

        // Hashing is independent per file; results may complete in any
        // order. Upserts below stay on this thread because the store is
        // not safe for concurrent writers.
        let results: Vec<(String, Option<Digest>)> = match self.workers {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| {
                        StorageError::IoError(std::io::Error::new(
                            std::io::ErrorKind::Other,
                            format!("Failed to build worker pool: {}", e),
                        ))
                    })?;
                pool.install(|| files.par_iter().map(&hash_one).collect())
            }
            None => files.par_iter().map(&hash_one).collect(),
        };

        let mut hashed = 0usize;
        let mut skipped = 0usize;
        for (rel, digest) in &results {
            match digest {
                Some(digest) => {
                    store.upsert(rel, digest)?;
                    hashed += 1;
                }
                None => skipped += 1,
            }
        }

        store.flush()?;

        info!(
            hashed,
            skipped,
            duration_ms = start.elapsed().as_millis() as u64,
            "Baseline build completed"
        );

        Ok(BuildReport { hashed, skipped })
    }
}
