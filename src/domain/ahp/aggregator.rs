//! Aggregator - Combines criteria weights with per-criterion alternative weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LabelSet;

use super::StructuralError;

/// One alternative's place in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank.
    pub rank: usize,
    /// Zero-based position of the alternative in the input.
    pub index: usize,
    pub label: String,
    pub weight: f64,
}

/// Composite weights and the ranking derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Composite weight per alternative, in input order.
    pub composite_weights: Vec<f64>,
    /// Alternatives sorted by descending weight; ties keep input order.
    pub ranking: Vec<RankedAlternative>,
}

impl RankingResult {
    /// Returns the top-ranked alternative, if any.
    pub fn leader(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }
}

/// Multi-level weight aggregation.
pub struct Aggregator;

impl Aggregator {
    /// Computes composite weights and a ranking.
    ///
    /// `composite[j] = Σ_i criteria[i] * alternatives[i][j]`
    ///
    /// # Errors
    /// - `CriteriaCountMismatch` if there is not exactly one alternative
    ///   vector per criterion
    /// - `RaggedPriorities` if the alternative vectors differ in length
    /// - `LabelCountMismatch` if `labels` does not name every alternative
    pub fn aggregate(
        criteria: &[f64],
        alternatives: &[Vec<f64>],
        labels: &LabelSet,
    ) -> Result<RankingResult, StructuralError> {
        if criteria.len() != alternatives.len() {
            return Err(StructuralError::CriteriaCountMismatch {
                expected: criteria.len(),
                actual: alternatives.len(),
            });
        }

        let m = alternatives.first().map(Vec::len).unwrap_or(labels.len());
        if let Some((index, ragged)) = alternatives.iter().enumerate().find(|(_, v)| v.len() != m) {
            return Err(StructuralError::RaggedPriorities {
                index,
                expected: m,
                actual: ragged.len(),
            });
        }
        if labels.len() != m {
            return Err(StructuralError::LabelCountMismatch {
                expected: m,
                actual: labels.len(),
            });
        }

        let composite_weights: Vec<f64> = (0..m)
            .map(|j| {
                criteria
                    .iter()
                    .zip(alternatives)
                    .map(|(c, alt)| c * alt[j])
                    .sum()
            })
            .collect();

        let mut order: Vec<usize> = (0..m).collect();
        // Stable sort keeps input order for equal weights.
        order.sort_by(|&a, &b| composite_weights[b].total_cmp(&composite_weights[a]));

        let ranking = order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedAlternative {
                rank: position + 1,
                index,
                label: labels[index].to_string(),
                weight: composite_weights[index],
            })
            .collect();

        Ok(RankingResult {
            composite_weights,
            ranking,
        })
    }
}
