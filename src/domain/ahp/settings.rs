//! Engine settings passed explicitly to the builder, validator and engine.

use serde::{Deserialize, Serialize};

use super::RandomIndexTable;

/// Decimals kept when a lower-triangle reciprocal is stored.
pub const DEFAULT_RECIPROCAL_PRECISION: u32 = 4;

/// Smallest matrix a judge may build.
pub const DEFAULT_MIN_MATRIX_SIZE: usize = 2;

/// Largest matrix a judge may build; the RI table covers up to this size.
pub const DEFAULT_MAX_MATRIX_SIZE: usize = 12;

/// Consistency is acceptable when CR is strictly below this value.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Substituted for a column sum of exactly zero.
pub const ZERO_COLUMN_EPSILON: f64 = 1e-12;

/// Tunable parameters of the AHP core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AhpSettings {
    pub reciprocal_precision: u32,
    pub min_matrix_size: usize,
    pub max_matrix_size: usize,
    pub random_index: RandomIndexTable,
}

impl AhpSettings {
    /// Returns true if `size` is within the configured bounds.
    pub fn allows_size(&self, size: usize) -> bool {
        (self.min_matrix_size..=self.max_matrix_size).contains(&size)
    }
}

impl Default for AhpSettings {
    fn default() -> Self {
        Self {
            reciprocal_precision: DEFAULT_RECIPROCAL_PRECISION,
            min_matrix_size: DEFAULT_MIN_MATRIX_SIZE,
            max_matrix_size: DEFAULT_MAX_MATRIX_SIZE,
            random_index: RandomIndexTable::default(),
        }
    }
}
