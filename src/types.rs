//! Core types shared across the baseline engine.

use std::collections::BTreeMap;

/// Length in bytes of a content digest (BLAKE3-256).
pub const DIGEST_LEN: usize = 32;

/// Content digest of a file. Equality is byte equality; the canonical
/// textual form is lowercase hex (64 characters).
pub type Digest = [u8; DIGEST_LEN];

/// A baseline: root-relative path (forward-slash, NFC-normalized) to the
/// digest of that file's content.
///
/// An ordered map so that every enumeration of a baseline is sorted
/// lexicographically by path, which keeps comparison output and tests
/// deterministic.
pub type Baseline = BTreeMap<String, Digest>;
