//! In-memory workbook writer for testing.

use std::sync::{Mutex, PoisonError};

use crate::domain::report::Workbook;
use crate::ports::{WorkbookError, WorkbookFormat, WorkbookWriter, WrittenWorkbook};

/// Captures written workbooks instead of persisting them.
///
/// # Example
///
/// ```ignore
/// let writer = Arc::new(InMemoryWorkbookWriter::new());
/// handler.handle(cmd)?;
/// assert_eq!(writer.written().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryWorkbookWriter {
    written: Mutex<Vec<Workbook>>,
    fail_with: Option<WorkbookError>,
}

impl InMemoryWorkbookWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer whose every write fails with `error`.
    pub fn failing(error: WorkbookError) -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    // === Test Helpers ===

    /// Returns every workbook written so far, oldest first.
    pub fn written(&self) -> Vec<Workbook> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent workbook, if any.
    pub fn last(&self) -> Option<Workbook> {
        self.written().pop()
    }
}

impl WorkbookWriter for InMemoryWorkbookWriter {
    fn write(&self, workbook: &Workbook) -> Result<WrittenWorkbook, WorkbookError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }

        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(workbook.clone());

        Ok(WrittenWorkbook {
            location: format!("memory://{}", workbook.name),
            format: WorkbookFormat::Json,
            sheet_count: workbook.sheets.len(),
        })
    }
}
