//! Intact: Filesystem Integrity Baselines
//!
//! Computes a BLAKE3 content digest for every regular file under a directory
//! tree, persists the path-to-digest mapping as a portable baseline, and
//! compares two baselines into a four-way classification: identical,
//! corrupted, missing, extra.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod store;
pub mod tree;
pub mod types;
