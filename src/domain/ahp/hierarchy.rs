//! Hierarchy - Criteria matrix plus one alternatives matrix per criterion.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::LabelSet;

use super::{
    AhpError, AhpSettings, Aggregator, MatrixRole, MatrixValidationFailure, MatrixValidator,
    PairwiseMatrix, PriorityEngine, PriorityResult, RankingResult, StructuralError,
};

/// A matrix together with what was computed from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixEvaluation {
    pub labels: LabelSet,
    /// Raw tokens as entered (diagonal and reciprocals included).
    pub pairwise: Vec<Vec<String>>,
    pub result: PriorityResult,
}

impl MatrixEvaluation {
    /// Validates and computes a single matrix.
    ///
    /// All-or-nothing: either every cell is valid and a full result is
    /// produced, or every invalid cell is reported and nothing is computed.
    pub fn evaluate(
        matrix: &PairwiseMatrix,
        labels: LabelSet,
        role: MatrixRole,
        settings: &AhpSettings,
    ) -> Result<Self, AhpError> {
        if labels.len() != matrix.size() {
            return Err(StructuralError::LabelCountMismatch {
                expected: matrix.size(),
                actual: labels.len(),
            }
            .into());
        }

        let judgments = MatrixValidator::validate(matrix).map_err(|rejection| rejection.for_role(role))?;
        let result = PriorityEngine::compute(&judgments, &settings.random_index);

        debug!(
            %role,
            size = matrix.size(),
            lambda_max = result.lambda_max,
            cr = result.cr,
            consistent = result.consistent,
            "computed priorities"
        );

        Ok(Self {
            labels,
            pairwise: matrix.rows().to_vec(),
            result,
        })
    }
}

/// The full decision model of hierarchical mode.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyModel {
    pub criteria: PairwiseMatrix,
    /// One matrix per criterion, in criteria order.
    pub alternatives: Vec<PairwiseMatrix>,
    pub criteria_labels: LabelSet,
    pub alternative_labels: LabelSet,
}

/// Everything computed for a hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyResult {
    pub criteria: MatrixEvaluation,
    pub alternatives: Vec<MatrixEvaluation>,
    pub ranking: RankingResult,
}

impl HierarchyModel {
    /// Number of criteria.
    pub fn criteria_count(&self) -> usize {
        self.criteria.size()
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternative_labels.len()
    }

    /// Checks the model's shape before any computation.
    ///
    /// # Errors
    /// - `MissingMatrix` when fewer alternatives matrices than criteria exist
    /// - `MatrixCountMismatch` when there are more
    /// - `AlternativeSizeMismatch` when a matrix disagrees with the declared
    ///   alternative count
    /// - `LabelCountMismatch` when criteria labels do not fit the criteria matrix
    pub fn check_structure(&self) -> Result<(), StructuralError> {
        let n = self.criteria_count();
        let m = self.alternative_count();

        if self.criteria_labels.len() != n {
            return Err(StructuralError::LabelCountMismatch {
                expected: n,
                actual: self.criteria_labels.len(),
            });
        }
        if self.alternatives.len() < n {
            return Err(StructuralError::MissingMatrix {
                criterion: self.alternatives.len(),
            });
        }
        if self.alternatives.len() > n {
            return Err(StructuralError::MatrixCountMismatch {
                expected: n,
                actual: self.alternatives.len(),
            });
        }
        if let Some((criterion, matrix)) = self
            .alternatives
            .iter()
            .enumerate()
            .find(|(_, matrix)| matrix.size() != m)
        {
            return Err(StructuralError::AlternativeSizeMismatch {
                criterion,
                expected: m,
                actual: matrix.size(),
            });
        }

        Ok(())
    }

    /// Evaluates every matrix and aggregates the final ranking.
    ///
    /// The criteria matrix is checked first. Alternatives matrices are all
    /// validated before aborting, so the error lists every bad cell across
    /// every matrix. Nothing is aggregated from partial input.
    pub fn evaluate(&self, settings: &AhpSettings) -> Result<HierarchyResult, AhpError> {
        self.check_structure()?;

        let criteria = MatrixEvaluation::evaluate(
            &self.criteria,
            self.criteria_labels.clone(),
            MatrixRole::Criteria,
            settings,
        )?;

        let mut alternatives = Vec::with_capacity(self.alternatives.len());
        let mut failures: Vec<MatrixValidationFailure> = Vec::new();

        for (criterion, matrix) in self.alternatives.iter().enumerate() {
            match MatrixEvaluation::evaluate(
                matrix,
                self.alternative_labels.clone(),
                MatrixRole::Alternatives { criterion },
                settings,
            ) {
                Ok(evaluation) => alternatives.push(evaluation),
                Err(AhpError::InvalidEntries(mut found)) => failures.append(&mut found),
                Err(other) => return Err(other),
            }
        }

        if !failures.is_empty() {
            return Err(AhpError::InvalidEntries(failures));
        }

        let vectors: Vec<Vec<f64>> = alternatives
            .iter()
            .map(|a| a.result.priority_vector.clone())
            .collect();
        let ranking = Aggregator::aggregate(
            &criteria.result.priority_vector,
            &vectors,
            &self.alternative_labels,
        )?;

        Ok(HierarchyResult {
            criteria,
            alternatives,
            ranking,
        })
    }
}
