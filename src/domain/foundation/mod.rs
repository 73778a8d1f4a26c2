//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the AHP domain.

mod errors;
mod labels;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use labels::LabelSet;
