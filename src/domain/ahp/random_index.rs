//! Random Index lookup used to turn CI into CR.

use serde::{Deserialize, Serialize};

/// Saaty's Random Index values for matrix sizes 1 through 12.
pub const RANDOM_INDEX_VALUES: [f64; 12] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48,
];

/// RI used for any size the table does not cover.
pub const DEFAULT_RANDOM_INDEX_FALLBACK: f64 = 1.49;

/// RI table with an explicit fallback for sizes outside it.
///
/// The fallback is an approximation for n > 12 (and n = 0); it is kept
/// configurable rather than extended with guessed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomIndexTable {
    pub fallback: f64,
}

impl RandomIndexTable {
    /// Creates a table with a custom fallback.
    pub fn with_fallback(fallback: f64) -> Self {
        Self { fallback }
    }

    /// Returns the RI for a matrix of size `n`.
    pub fn lookup(&self, n: usize) -> f64 {
        n.checked_sub(1)
            .and_then(|idx| RANDOM_INDEX_VALUES.get(idx))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Returns true if `n` is covered by the table rather than the fallback.
    pub fn covers(&self, n: usize) -> bool {
        (1..=RANDOM_INDEX_VALUES.len()).contains(&n)
    }
}

impl Default for RandomIndexTable {
    fn default() -> Self {
        Self::with_fallback(DEFAULT_RANDOM_INDEX_FALLBACK)
    }
}
