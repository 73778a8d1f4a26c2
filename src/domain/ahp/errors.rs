//! Error types for the AHP core.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::ValidationReport;

/// A rejected write through the reciprocal matrix builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} matrix")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is on the diagonal and fixed at 1")]
    DiagonalCell { row: usize, col: usize },

    #[error("cell ({row}, {col}) is in the lower triangle and derived from ({col}, {row})")]
    LowerTriangleCell { row: usize, col: usize },
}

/// Shape problems that make a computation cycle impossible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("matrix size {size} is outside the allowed range {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("alternatives matrix under criterion C{} is missing", .criterion + 1)]
    MissingMatrix { criterion: usize },

    #[error("expected {expected} alternatives matrices, got {actual}")]
    MatrixCountMismatch { expected: usize, actual: usize },

    #[error(
        "alternatives matrix under criterion C{} is {actual}x{actual}, expected {expected}x{expected}",
        .criterion + 1
    )]
    AlternativeSizeMismatch {
        criterion: usize,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} priority vectors, got {actual}")]
    CriteriaCountMismatch { expected: usize, actual: usize },

    #[error("priority vector {index} has length {actual}, expected {expected}")]
    RaggedPriorities {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },
}

/// Which matrix of a model a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixRole {
    /// The single matrix of single-matrix mode.
    Single,
    /// The criteria comparison matrix of a hierarchy.
    Criteria,
    /// The alternatives matrix under the zero-based criterion index.
    Alternatives { criterion: usize },
}

impl fmt::Display for MatrixRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixRole::Single => write!(f, "matrix"),
            MatrixRole::Criteria => write!(f, "criteria matrix"),
            MatrixRole::Alternatives { criterion } => {
                write!(f, "alternatives matrix under criterion C{}", criterion + 1)
            }
        }
    }
}

/// Every invalid cell of one matrix, tagged with the matrix it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixValidationFailure {
    pub role: MatrixRole,
    pub report: ValidationReport,
}

impl fmt::Display for MatrixValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.report)
    }
}

/// Umbrella error for a full computation cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("please correct inputs ({} matrices with invalid cells)", .0.len())]
    InvalidEntries(Vec<MatrixValidationFailure>),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Labels(#[from] ValidationError),
}

/// Why a pairwise matrix could not become a judgment matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixRejection {
    /// Rows of unequal width; nothing was parsed.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Square, but some cells are not positive reals.
    #[error("{0}")]
    InvalidCells(ValidationReport),
}

impl MatrixRejection {
    /// Returns the cell report, if the rejection was about cells.
    pub fn into_report(self) -> Option<ValidationReport> {
        match self {
            MatrixRejection::InvalidCells(report) => Some(report),
            MatrixRejection::Structural(_) => None,
        }
    }

    /// Tags the rejection with the matrix it came from.
    pub fn for_role(self, role: MatrixRole) -> AhpError {
        match self {
            MatrixRejection::Structural(err) => err.into(),
            MatrixRejection::InvalidCells(report) => AhpError::invalid(role, report),
        }
    }
}

impl AhpError {
    /// Wraps the report of a single matrix.
    pub fn invalid(role: MatrixRole, report: ValidationReport) -> Self {
        AhpError::InvalidEntries(vec![MatrixValidationFailure { role, report }])
    }
}

impl From<&AhpError> for DomainError {
    fn from(err: &AhpError) -> Self {
        match err {
            AhpError::InvalidEntries(failures) => {
                let cell_count: usize = failures.iter().map(|f| f.report.len()).sum();
                failures.iter().fold(
                    DomainError::new(ErrorCode::InvalidEntries, err.to_string())
                        .with_detail("invalid_cells", cell_count.to_string()),
                    |acc, failure| acc.with_detail(failure.role.to_string(), failure.report.to_string()),
                )
            }
            AhpError::Structural(StructuralError::SizeOutOfRange { size, min, max }) => {
                DomainError::new(ErrorCode::SizeOutOfRange, err.to_string())
                    .with_detail("size", size.to_string())
                    .with_detail("min", min.to_string())
                    .with_detail("max", max.to_string())
            }
            AhpError::Structural(_) => DomainError::new(ErrorCode::StructuralMismatch, err.to_string()),
            AhpError::Matrix(_) => DomainError::new(ErrorCode::InvalidCellWrite, err.to_string()),
            AhpError::Labels(inner) => inner.clone().into(),
        }
    }
}
