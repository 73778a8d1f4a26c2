//! Priority Engine - Column-normalization priorities and consistency metrics.

use serde::{Deserialize, Serialize};

use super::{JudgmentMatrix, RandomIndexTable, CONSISTENCY_THRESHOLD, ZERO_COLUMN_EPSILON};

/// Whether a matrix's judgments are consistent enough to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyVerdict {
    Acceptable,
    NotAcceptable,
}

impl ConsistencyVerdict {
    /// Classifies a consistency ratio against the `CR < 0.10` rule.
    pub fn from_ratio(cr: f64) -> Self {
        if cr < CONSISTENCY_THRESHOLD {
            ConsistencyVerdict::Acceptable
        } else {
            ConsistencyVerdict::NotAcceptable
        }
    }

    /// Returns true for `Acceptable`.
    pub fn is_acceptable(&self) -> bool {
        matches!(self, ConsistencyVerdict::Acceptable)
    }

    /// Returns the verdict line shown to the operator.
    pub fn label(&self) -> &'static str {
        match self {
            ConsistencyVerdict::Acceptable => "✓ Consistency acceptable (CR < 0.10)",
            ConsistencyVerdict::NotAcceptable => "✗ Consistency NOT acceptable (CR ≥ 0.10)",
        }
    }
}

/// Everything derived from one judgment matrix. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResult {
    /// Each column divided by its sum.
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Row averages of the normalized matrix; sums to 1.
    pub priority_vector: Vec<f64>,
    /// Estimate of the principal eigenvalue.
    pub lambda_max: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "RI")]
    pub ri: f64,
    #[serde(rename = "CR")]
    pub cr: f64,
    /// `CR < 0.10`.
    pub consistent: bool,
}

impl PriorityResult {
    /// Returns the matrix size.
    pub fn size(&self) -> usize {
        self.priority_vector.len()
    }

    /// Returns the consistency verdict.
    pub fn verdict(&self) -> ConsistencyVerdict {
        ConsistencyVerdict::from_ratio(self.cr)
    }
}

/// Priority computation for judgment matrices.
pub struct PriorityEngine;

impl PriorityEngine {
    /// Computes priorities and consistency for `matrix`.
    ///
    /// # Algorithm
    /// 1. `colSum[j] = Σ_i a[i][j]` (an exact zero becomes 1e-12)
    /// 2. `normalized[i][j] = a[i][j] / colSum[j]`
    /// 3. `priority[i]` = mean of row `i` of `normalized`
    /// 4. `weighted[i] = Σ_j a[i][j] * priority[j]`
    /// 5. `lambda[i] = weighted[i] / priority[i]`, `λmax` = mean of `lambda`
    /// 6. `CI = (λmax - n) / (n - 1)`, `CR = CI / RI` (0 when RI = 0)
    ///
    /// # Edge Cases
    /// - n = 1: CI is reported as 0 (there is nothing to be inconsistent about)
    /// - n outside the RI table: RI uses the table's fallback
    pub fn compute(matrix: &JudgmentMatrix, random_index: &RandomIndexTable) -> PriorityResult {
        let rows = matrix.rows();
        let n = rows.len();
        let size = n as f64;

        let col_sums: Vec<f64> = (0..n)
            .map(|j| {
                let sum: f64 = rows.iter().map(|row| row[j]).sum();
                if sum == 0.0 {
                    ZERO_COLUMN_EPSILON
                } else {
                    sum
                }
            })
            .collect();

        let normalized_matrix: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| row.iter().zip(&col_sums).map(|(a, sum)| a / sum).collect())
            .collect();

        let priority_vector: Vec<f64> = normalized_matrix
            .iter()
            .map(|row| row.iter().sum::<f64>() / size)
            .collect();

        let lambda_max = rows
            .iter()
            .zip(&priority_vector)
            .map(|(row, p)| {
                let weighted: f64 = row.iter().zip(&priority_vector).map(|(a, w)| a * w).sum();
                weighted / p
            })
            .sum::<f64>()
            / size;

        let ci = if n > 1 {
            (lambda_max - size) / (size - 1.0)
        } else {
            0.0
        };
        let ri = random_index.lookup(n);
        let cr = if ri == 0.0 { 0.0 } else { ci / ri };

        PriorityResult {
            normalized_matrix,
            priority_vector,
            lambda_max,
            ci,
            ri,
            cr,
            consistent: ConsistencyVerdict::from_ratio(cr).is_acceptable(),
        }
    }
}
