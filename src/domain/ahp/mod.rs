//! AHP Module - Pure domain services for the Analytic Hierarchy Process.
//!
//! Data flows leaves-first:
//! raw tokens → `value_parser` → `PairwiseMatrix` (reciprocal builder)
//! → `MatrixValidator` → `PriorityEngine` → (hierarchical mode) `Aggregator`.
//!
//! # Design Philosophy
//!
//! Every operation is a synchronous function over in-memory values. Settings
//! are passed explicitly; there is no shared or global state. A
//! `PairwiseMatrix` is mutated only through its upper-triangle write methods.

mod aggregator;
mod errors;
mod hierarchy;
mod matrix_validator;
mod pairwise_matrix;
mod priority_engine;
mod random_index;
mod settings;
mod value_parser;

pub use aggregator::{Aggregator, RankedAlternative, RankingResult};
pub use errors::{
    AhpError, MatrixError, MatrixRejection, MatrixRole, MatrixValidationFailure, StructuralError,
};
pub use hierarchy::{HierarchyModel, HierarchyResult, MatrixEvaluation};
pub use matrix_validator::{
    CellError, JudgmentMatrix, MatrixValidator, ValidationReport, RECIPROCITY_TOLERANCE,
};
pub use pairwise_matrix::{PairwiseMatrix, UNIT_TOKEN};
pub use priority_engine::{ConsistencyVerdict, PriorityEngine, PriorityResult};
pub use random_index::{RandomIndexTable, DEFAULT_RANDOM_INDEX_FALLBACK, RANDOM_INDEX_VALUES};
pub use settings::{
    AhpSettings, CONSISTENCY_THRESHOLD, DEFAULT_MAX_MATRIX_SIZE, DEFAULT_MIN_MATRIX_SIZE,
    DEFAULT_RECIPROCAL_PRECISION, ZERO_COLUMN_EPSILON,
};
pub use value_parser::{parse_judgment, parse_value, ParseError};
