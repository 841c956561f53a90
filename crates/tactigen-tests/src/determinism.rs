//! Determinism checks for generated records.
//!
//! Generation is fully seeded, so running the same closure several times must
//! produce identical bytes. [`verify_determinism`] runs it and reports the
//! first differing byte if it does not.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference. Equal to the shorter length when one
    /// output is a prefix of the other.
    pub offset: usize,
    /// Which run (0-indexed) differed from run 0.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run {} differs at byte {}", self.run_index, self.offset)
    }
}

impl DeterminismResult {
    /// Panics with the difference if the runs disagreed.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!("non-deterministic output after {} runs: {}", self.runs, diff);
        }
    }
}

/// BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Runs `generate` `runs` times and compares every output with the first.
pub fn verify_determinism<F>(generate: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> Vec<u8>,
{
    let runs = runs.max(2);
    let first = generate();
    let hash = compute_hash(&first);

    for run_index in 1..runs {
        let output = generate();
        if let Some(offset) = first_difference(&first, &output) {
            return DeterminismResult {
                is_deterministic: false,
                runs: run_index + 1,
                hash,
                diff: Some(DiffInfo { offset, run_index }),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        diff: None,
    }
}
