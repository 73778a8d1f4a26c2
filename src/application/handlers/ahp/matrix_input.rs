//! MatrixInput - Caller-facing shape of one pairwise matrix.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::ahp::{AhpSettings, PairwiseMatrix, StructuralError};
use crate::domain::foundation::{LabelSet, ValidationError};

/// One pairwise matrix as submitted by a caller.
///
/// Cells may be given as strings (`"1/3"`), numbers (`3`, `0.5`) or `null`
/// for an empty cell. Only the upper triangle is read; the diagonal and the
/// lower triangle are rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_cells")]
    pub cells: Vec<Vec<String>>,
}

impl MatrixInput {
    /// Creates an input from a token grid with generated labels.
    pub fn from_cells<S: Into<String>>(cells: Vec<Vec<S>>) -> Self {
        Self {
            labels: None,
            cells: cells
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Attaches explicit labels.
    pub fn with_labels<S: Into<String>>(mut self, labels: Vec<S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Number of rows submitted.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Builds the pairwise matrix from the upper triangle.
    pub fn to_matrix(&self, settings: &AhpSettings) -> Result<PairwiseMatrix, StructuralError> {
        PairwiseMatrix::from_grid(&self.cells, settings)
    }

    /// Resolves labels, generating `{prefix}1..` when none were given.
    pub fn resolve_labels(&self, field: &str, prefix: &str) -> Result<LabelSet, ValidationError> {
        LabelSet::or_generated(field, self.labels.clone(), prefix, self.size())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellToken {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
}

impl CellToken {
    fn into_token(self) -> String {
        match self {
            CellToken::Text(s) => s,
            CellToken::Integer(i) => i.to_string(),
            CellToken::Number(f) => f.to_string(),
            // Not a number; kept verbatim so the validator reports the cell
            CellToken::Bool(b) => b.to_string(),
        }
    }
}

fn deserialize_cells<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Vec<Option<CellToken>>> = Vec::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(CellToken::into_token).unwrap_or_default())
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::MatrixValidator;

    #[test]
    fn deserializes_mixed_cell_types() {
        let json = r#"{"cells": [["1", 3, 0.5], [null, "1", "1/3"], ["", "", 1]]}"#;

        let input: MatrixInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.labels, None);
        assert_eq!(input.cells[0], vec!["1", "3", "0.5"]);
        assert_eq!(input.cells[1], vec!["", "1", "1/3"]);
        assert_eq!(input.cells[2][2], "1");
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "labels: [Cost, Speed]\ncells:\n  - [1, 1/5]\n  - [5, 1]\n";

        let input: MatrixInput = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(input.labels, Some(vec!["Cost".to_string(), "Speed".to_string()]));
        assert_eq!(input.cells[0][1], "1/5");
    }

    #[test]
    fn builds_matrix_from_upper_triangle() {
        let input = MatrixInput::from_cells(vec![vec!["1", "4"], vec!["99", "1"]]);

        let matrix = input.to_matrix(&AhpSettings::default()).unwrap();

        assert_eq!(matrix.raw(1, 0), Some("0.2500"));
    }

    #[test]
    fn submitted_diagonal_and_lower_cells_are_rebuilt() {
        let json = r#"{"cells": [["7", "2"], ["3", "1"]]}"#;
        let input: MatrixInput = serde_json::from_str(json).unwrap();

        let matrix = input.to_matrix(&AhpSettings::default()).unwrap();

        assert_eq!(matrix.raw(0, 0), Some("1"));
        assert_eq!(matrix.raw(1, 0), Some("0.5000"));
        let judgments = MatrixValidator::validate(&matrix).unwrap();
        assert_eq!(judgments.rows(), &[vec![1.0, 2.0], vec![0.5, 1.0]]);
    }

    #[test]
    fn ragged_submission_is_a_structural_error() {
        let json = r#"{"cells": [["1", "2"], ["1"]]}"#;
        let input: MatrixInput = serde_json::from_str(json).unwrap();

        let result = input.to_matrix(&AhpSettings::default());

        assert_eq!(
            result,
            Err(StructuralError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn generates_labels_when_missing() {
        let input = MatrixInput::from_cells(vec![vec!["1", "2"], vec!["", "1"]]);

        let labels = input.resolve_labels("criteria_labels", LabelSet::CRITERIA_PREFIX).unwrap();

        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["C1", "C2"]);
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let input = MatrixInput::from_cells(vec![vec!["1", "2"], vec!["", "1"]]).with_labels(vec!["Only"]);

        let result = input.resolve_labels("criteria_labels", LabelSet::CRITERIA_PREFIX);

        assert!(matches!(result, Err(ValidationError::CountMismatch { .. })));
    }

    #[test]
    fn rejects_oversized_grid() {
        let cells = vec![vec!["1"; 13]; 13];
        let input = MatrixInput::from_cells(cells);

        let result = input.to_matrix(&AhpSettings::default());

        assert!(matches!(result, Err(StructuralError::SizeOutOfRange { size: 13, .. })));
    }
}
