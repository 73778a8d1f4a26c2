//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (labels, errors)
//! - `ahp` - Pairwise matrices, validation, priorities, consistency, aggregation
//! - `report` - Summaries and workbook payloads built from AHP results

pub mod ahp;
pub mod foundation;
pub mod report;
