//! Four-way comparison of two baselines

use crate::types::Baseline;

/// Classification of every path across two baselines.
///
/// Every key of the first baseline lands in exactly one of
/// identical / corrupted / missing; every key unique to the second lands
/// in extra. The path lists are sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Paths present in both baselines with equal digests.
    pub identical: usize,
    /// Paths present in both baselines with differing digests.
    pub corrupted: Vec<String>,
    /// Paths present in the first baseline only.
    pub missing: Vec<String>,
    /// Paths present in the second baseline only.
    pub extra: Vec<String>,
}

/// Compare two baselines. Pure function over in-memory mappings; no I/O.
///
/// Output ordering is deterministic because baselines are ordered maps.
pub fn compare(baseline1: &Baseline, baseline2: &Baseline) -> ComparisonResult {
    let mut identical = 0usize;
    let mut corrupted = Vec::new();
    let mut missing = Vec::new();
    let mut extra = Vec::new();

    for (path, digest1) in baseline1 {
        match baseline2.get(path) {
            Some(digest2) if digest2 == digest1 => identical += 1,
            Some(_) => corrupted.push(path.clone()),
            None => missing.push(path.clone()),
        }
    }

    for path in baseline2.keys() {
        if !baseline1.contains_key(path) {
            extra.push(path.clone());
        }
    }

    ComparisonResult {
        identical,
        corrupted,
        missing,
        extra,
    }
}
