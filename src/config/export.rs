//! Workbook export configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::ports::WorkbookFormat;

use super::error::ValidationError;

/// Where and how workbooks are written
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Target directory; export is skipped when unset
    pub directory: Option<String>,

    #[serde(default)]
    pub format: WorkbookFormat,
}

impl ExportConfig {
    /// Check if a target directory is configured
    pub fn is_enabled(&self) -> bool {
        self.directory.is_some()
    }

    /// Get the target directory as a path
    pub fn directory_path(&self) -> Option<PathBuf> {
        self.directory.as_ref().map(|d| PathBuf::from(d.trim()))
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.directory {
            Some(dir) if dir.trim().is_empty() => Err(ValidationError::BlankExportDirectory),
            _ => Ok(()),
        }
    }
}
