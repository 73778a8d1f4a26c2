//! Matrix Validator - Re-parses every cell and collects all bad entries in one pass.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::{parse_judgment, MatrixRejection, PairwiseMatrix, ParseError, StructuralError};

/// Tolerance for `a[i][j] * a[j][i] == 1` given 4-decimal stored reciprocals.
pub const RECIPROCITY_TOLERANCE: f64 = 1e-3;

/// One cell that could not be read as a positive real.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellError {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// The raw token exactly as stored.
    pub raw_value: String,
    pub reason: ParseError,
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, col {}: \"{}\" ({})",
            self.row + 1,
            self.col + 1,
            self.raw_value,
            self.reason
        )
    }
}

/// Every invalid cell of a matrix, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<CellError>,
}

impl ValidationReport {
    /// Returns true if no cell failed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of invalid cells.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the report holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the zero-based positions of every invalid cell.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.errors.iter().map(|e| (e.row, e.col)).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.errors.iter().map(|e| format!("Invalid value at {}", e)).collect();
        write!(f, "{}", lines.join("; "))
    }
}

/// A square matrix of strictly positive finite reals.
///
/// Only [`MatrixValidator::validate`] produces one, so holders may assume
/// every entry is usable by the priority engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JudgmentMatrix {
    values: Vec<Vec<f64>>,
}

impl JudgmentMatrix {
    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns the entry at (`row`, `col`), if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }

    /// Returns the numeric grid.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Checks `|a[i][j] * a[j][i] - 1| < tolerance` for every off-diagonal pair.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        self.reciprocity_deviation() < tolerance
    }

    /// Largest `|a[i][j] * a[j][i] - 1|` over all off-diagonal pairs.
    pub fn reciprocity_deviation(&self) -> f64 {
        let n = self.size();
        let mut worst: f64 = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                worst = worst.max((self.values[i][j] * self.values[j][i] - 1.0).abs());
            }
        }
        worst
    }

    #[cfg(test)]
    pub(crate) fn from_rows_unchecked(values: Vec<Vec<f64>>) -> Self {
        Self { values }
    }
}

/// Validation of raw pairwise matrices.
pub struct MatrixValidator;

impl MatrixValidator {
    /// Validates every cell of `matrix`.
    ///
    /// Validation is exhaustive: all bad cells are collected before
    /// returning, so an operator can fix everything in one round-trip.
    ///
    /// # Errors
    /// - `MatrixRejection::Structural` when a row's width differs from the
    ///   row count
    /// - `MatrixRejection::InvalidCells` listing every unusable cell
    pub fn validate(matrix: &PairwiseMatrix) -> Result<JudgmentMatrix, MatrixRejection> {
        let size = matrix.rows().len();
        if let Some((row, cells)) = matrix
            .rows()
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != size)
        {
            return Err(StructuralError::NotSquare {
                row,
                expected: size,
                actual: cells.len(),
            }
            .into());
        }

        let mut report = ValidationReport::default();
        let mut values = Vec::with_capacity(matrix.size());

        for (row, cells) in matrix.rows().iter().enumerate() {
            let mut parsed = Vec::with_capacity(cells.len());
            for (col, raw) in cells.iter().enumerate() {
                match parse_judgment(raw) {
                    Ok(value) => parsed.push(value),
                    Err(reason) => report.errors.push(CellError {
                        row,
                        col,
                        raw_value: raw.clone(),
                        reason,
                    }),
                }
            }
            values.push(parsed);
        }

        if !report.is_ok() {
            return Err(MatrixRejection::InvalidCells(report));
        }

        let judgments = JudgmentMatrix { values };
        let deviation = judgments.reciprocity_deviation();
        if deviation >= RECIPROCITY_TOLERANCE {
            warn!(deviation, "matrix deviates from reciprocity beyond rounding tolerance");
        }

        Ok(judgments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{AhpError, AhpSettings, MatrixRole};
    use approx::assert_relative_eq;

    fn matrix(size: usize) -> PairwiseMatrix {
        PairwiseMatrix::new(size, &AhpSettings::default()).unwrap()
    }

    #[test]
    fn fresh_matrix_validates() {
        let judgments = MatrixValidator::validate(&matrix(3)).unwrap();
        assert_eq!(judgments.size(), 3);
        assert_relative_eq!(judgments.get(1, 2).unwrap(), 1.0);
    }

    #[test]
    fn collects_every_invalid_cell() {
        let mut m = matrix(4);
        m.set_upper(0, 1, "").unwrap();
        m.set_upper(2, 3, "abc").unwrap();

        let report = MatrixValidator::validate(&m).unwrap_err().into_report().unwrap();
        let positions = report.positions();
        assert!(positions.contains(&(0, 1)));
        assert!(positions.contains(&(2, 3)));
        // Mirrors were cleared too.
        assert!(positions.contains(&(1, 0)));
        assert!(positions.contains(&(3, 2)));
        assert_eq!(report.len(), 4);
    }

    #[test]
    fn negative_judgment_is_invalid_in_both_cells() {
        let mut m = matrix(2);
        m.set_upper(0, 1, "-3").unwrap();

        let report = MatrixValidator::validate(&m).unwrap_err().into_report().unwrap();
        assert_eq!(report.positions(), vec![(0, 1), (1, 0)]);
        assert!(report
            .errors
            .iter()
            .all(|e| matches!(e.reason, ParseError::NonPositive { .. })));
    }

    #[test]
    fn zero_judgment_is_invalid() {
        let mut m = matrix(2);
        m.set_upper(0, 1, "0").unwrap();

        let report = MatrixValidator::validate(&m).unwrap_err().into_report().unwrap();
        assert_eq!(report.errors[0].raw_value, "0");
        assert_eq!(report.errors[1].reason, ParseError::Empty);
    }

    #[test]
    fn report_display_is_one_based() {
        let mut m = matrix(2);
        m.set_upper(0, 1, "x").unwrap();

        let report = MatrixValidator::validate(&m).unwrap_err().into_report().unwrap();
        let text = report.to_string();
        assert!(text.starts_with("Invalid value at row 1, col 2: \"x\""));
    }

    #[test]
    fn rounded_reciprocals_stay_within_tolerance() {
        let mut m = matrix(3);
        m.set_upper(0, 1, "3").unwrap();
        m.set_upper(0, 2, "7").unwrap();
        m.set_upper(1, 2, "1/9").unwrap();

        let judgments = MatrixValidator::validate(&m).unwrap();
        assert!(judgments.is_reciprocal(RECIPROCITY_TOLERANCE));
        assert!(judgments.reciprocity_deviation() > 0.0);
    }

    #[test]
    fn ragged_rows_are_rejected_before_parsing() {
        let m = PairwiseMatrix::from_cells_unchecked(vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["1".to_string()],
        ]);

        let rejection = MatrixValidator::validate(&m).unwrap_err();

        assert_eq!(
            rejection,
            MatrixRejection::Structural(StructuralError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn rejection_is_tagged_with_its_matrix() {
        let mut m = matrix(2);
        m.set_upper(0, 1, "x").unwrap();

        let err = MatrixValidator::validate(&m)
            .unwrap_err()
            .for_role(MatrixRole::Alternatives { criterion: 1 });

        match err {
            AhpError::InvalidEntries(failures) => {
                assert_eq!(failures[0].role, MatrixRole::Alternatives { criterion: 1 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_reciprocal_grid_is_detected() {
        let judgments = JudgmentMatrix::from_rows_unchecked(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);
        assert!(!judgments.is_reciprocal(RECIPROCITY_TOLERANCE));
        assert_relative_eq!(judgments.reciprocity_deviation(), 3.0);
    }
}
