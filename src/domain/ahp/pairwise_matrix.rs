//! Reciprocal Matrix Builder - Keeps a pairwise matrix reciprocal as it is edited.
//!
//! The matrix stores the raw tokens a judge typed, exactly as the input grid
//! would show them. Only upper-triangle cells are writable; every write
//! immediately rewrites the mirrored lower-triangle cell with the reciprocal,
//! rounded to the configured precision, or clears it when the written token
//! has no usable reciprocal.

use serde::Serialize;

use super::{parse_value, AhpSettings, MatrixError, StructuralError};

/// Token held by diagonal cells and by freshly created off-diagonal cells.
pub const UNIT_TOKEN: &str = "1";

/// An n×n pairwise comparison matrix of raw tokens.
///
/// Serializable for display, never deserialized: every instance comes from
/// [`new`](Self::new) or [`from_grid`](Self::from_grid) and is edited only
/// through the upper-triangle writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairwiseMatrix {
    size: usize,
    reciprocal_precision: u32,
    cells: Vec<Vec<String>>,
}

impl PairwiseMatrix {
    /// Creates a matrix with every cell set to "1" (perfectly consistent).
    ///
    /// # Errors
    /// Returns `StructuralError::SizeOutOfRange` if `size` is outside the
    /// configured bounds.
    pub fn new(size: usize, settings: &AhpSettings) -> Result<Self, StructuralError> {
        if !settings.allows_size(size) {
            return Err(StructuralError::SizeOutOfRange {
                size,
                min: settings.min_matrix_size,
                max: settings.max_matrix_size,
            });
        }

        Ok(Self {
            size,
            reciprocal_precision: settings.reciprocal_precision,
            cells: vec![vec![UNIT_TOKEN.to_string(); size]; size],
        })
    }

    /// Builds a matrix from a full grid of raw tokens.
    ///
    /// Only the upper triangle is read; it is replayed through
    /// [`set_upper`](Self::set_upper), so the diagonal and lower triangle of
    /// the result are always derived, whatever the grid held there.
    pub fn from_grid<S: AsRef<str>>(
        grid: &[Vec<S>],
        settings: &AhpSettings,
    ) -> Result<Self, StructuralError> {
        let size = grid.len();
        let mut matrix = Self::new(size, settings)?;

        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != size {
                return Err(StructuralError::NotSquare {
                    row,
                    expected: size,
                    actual: cells.len(),
                });
            }
        }

        for (row, cells) in grid.iter().enumerate() {
            for (col, token) in cells.iter().enumerate().skip(row + 1) {
                matrix.write_upper(row, col, token.as_ref());
            }
        }

        Ok(matrix)
    }

    /// Writes a judge's token into upper-triangle cell (`row`, `col`).
    ///
    /// The mirrored cell (`col`, `row`) is set to the rounded reciprocal, or
    /// cleared to "" when the token is not a finite non-zero number.
    pub fn set_upper(&mut self, row: usize, col: usize, token: &str) -> Result<(), MatrixError> {
        if row >= self.size || col >= self.size {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        if row == col {
            return Err(MatrixError::DiagonalCell { row, col });
        }
        if row > col {
            return Err(MatrixError::LowerTriangleCell { row, col });
        }

        self.write_upper(row, col, token);
        Ok(())
    }

    /// Writes a numeric judgment into upper-triangle cell (`row`, `col`).
    pub fn set_upper_value(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.set_upper(row, col, &value.to_string())
    }

    fn write_upper(&mut self, row: usize, col: usize, token: &str) {
        let mirror = match parse_value(token) {
            Ok(value) if value != 0.0 => self.format_reciprocal(1.0 / value),
            _ => String::new(),
        };

        self.cells[row][col] = token.to_string();
        self.cells[col][row] = mirror;
    }

    fn format_reciprocal(&self, value: f64) -> String {
        format!("{:.*}", self.reciprocal_precision as usize, value)
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the decimals used for stored reciprocals.
    pub fn reciprocal_precision(&self) -> u32 {
        self.reciprocal_precision
    }

    /// Returns the raw token at (`row`, `col`), if in bounds.
    pub fn raw(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Returns the raw token grid.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn from_cells_unchecked(cells: Vec<Vec<String>>) -> Self {
        Self {
            size: cells.len(),
            reciprocal_precision: super::DEFAULT_RECIPROCAL_PRECISION,
            cells,
        }
    }
}
