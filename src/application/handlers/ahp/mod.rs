//! AHP command handlers.

mod evaluate_hierarchy;
mod evaluate_matrix;
mod export_workbook;
mod matrix_input;

pub use evaluate_hierarchy::{
    EvaluateHierarchyCommand, EvaluateHierarchyHandler, EvaluateHierarchyResult,
};
pub use evaluate_matrix::{EvaluateMatrixCommand, EvaluateMatrixHandler, EvaluateMatrixResult};
pub use export_workbook::{ExportWorkbookCommand, ExportWorkbookHandler};
pub use matrix_input::MatrixInput;
