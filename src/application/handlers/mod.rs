//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ahp;

pub use ahp::{
    EvaluateHierarchyCommand, EvaluateHierarchyHandler, EvaluateHierarchyResult,
    EvaluateMatrixCommand, EvaluateMatrixHandler, EvaluateMatrixResult, ExportWorkbookCommand,
    ExportWorkbookHandler, MatrixInput,
};
