//! AHP Sherpa - Analytic Hierarchy Process engine
//!
//! Turns pairwise judgments into priority vectors, consistency metrics and,
//! for a full hierarchy, a ranked list of alternatives. Results can be
//! rendered as a markdown summary or exported as a workbook payload.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
