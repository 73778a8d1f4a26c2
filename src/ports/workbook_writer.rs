//! Workbook Writer Port - Hands a finished workbook to a spreadsheet collaborator.
//!
//! The domain builds the [`Workbook`] payload; implementations decide where
//! and in which encoding it lands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::Workbook;

/// Port for persisting or transmitting an exported workbook.
///
/// # Contract
///
/// Implementations must:
/// - Write every sheet in order, header row first
/// - Either write the whole workbook or report an error (no partial files)
/// - Return where the workbook went, for display to the operator
///
/// # Usage
///
/// ```rust,ignore
/// let writer: &dyn WorkbookWriter = get_writer();
/// let written = writer.write(&workbook)?;
/// println!("saved to {}", written.location);
/// ```
pub trait WorkbookWriter: Send + Sync {
    /// Writes `workbook`.
    fn write(&self, workbook: &Workbook) -> Result<WrittenWorkbook, WorkbookError>;
}

/// Encodings supported for workbook files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkbookFormat {
    /// Excel spreadsheet, one worksheet per sheet.
    #[default]
    Xlsx,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

impl WorkbookFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            WorkbookFormat::Json => "application/json",
            WorkbookFormat::Yaml => "application/yaml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "xlsx",
            WorkbookFormat::Json => "json",
            WorkbookFormat::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookFormat::Xlsx => write!(f, "xlsx"),
            WorkbookFormat::Json => write!(f, "json"),
            WorkbookFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for WorkbookFormat {
    type Err = WorkbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(WorkbookFormat::Xlsx),
            "json" => Ok(WorkbookFormat::Json),
            "yaml" | "yml" => Ok(WorkbookFormat::Yaml),
            _ => Err(WorkbookError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Where a workbook was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenWorkbook {
    /// File path or other writer-specific location.
    pub location: String,
    pub format: WorkbookFormat,
    pub sheet_count: usize,
}

/// Errors that can occur while writing a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkbookError {
    /// Unsupported workbook format requested.
    #[error("Unsupported workbook format: {0}")]
    UnsupportedFormat(String),

    /// The workbook could not be encoded.
    #[error("Workbook serialization failed: {0}")]
    SerializationFailed(String),

    /// I/O error while writing.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl From<&WorkbookError> for DomainError {
    fn from(err: &WorkbookError) -> Self {
        DomainError::new(ErrorCode::ExportFailed, err.to_string())
    }
}
