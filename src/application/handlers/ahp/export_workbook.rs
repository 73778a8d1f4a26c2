//! ExportWorkbookHandler - Hands a built workbook to the configured writer.

use std::sync::Arc;

use tracing::error;

use crate::domain::report::Workbook;
use crate::ports::{WorkbookError, WorkbookWriter, WrittenWorkbook};

/// Command to export a workbook.
#[derive(Debug, Clone)]
pub struct ExportWorkbookCommand {
    pub workbook: Workbook,
}

/// Handler for workbook export.
pub struct ExportWorkbookHandler {
    writer: Arc<dyn WorkbookWriter>,
}

impl ExportWorkbookHandler {
    pub fn new(writer: Arc<dyn WorkbookWriter>) -> Self {
        Self { writer }
    }

    pub fn handle(&self, cmd: ExportWorkbookCommand) -> Result<WrittenWorkbook, WorkbookError> {
        if cmd.workbook.sheets.is_empty() {
            return Err(WorkbookError::SerializationFailed(format!(
                "workbook {} has no sheets",
                cmd.workbook.name
            )));
        }

        self.writer.write(&cmd.workbook).map_err(|err| {
            error!(workbook = %cmd.workbook.name, error = %err, "workbook export failed");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryWorkbookWriter;
    use crate::application::handlers::ahp::{
        EvaluateMatrixCommand, EvaluateMatrixHandler, MatrixInput,
    };
    use crate::domain::ahp::AhpSettings;

    fn built_workbook() -> Workbook {
        let matrix = MatrixInput::from_cells(vec![vec!["1", "2"], vec!["", "1"]]);
        EvaluateMatrixHandler::new(AhpSettings::default())
            .handle(EvaluateMatrixCommand { matrix })
            .unwrap()
            .workbook
    }

    #[test]
    fn writes_through_the_port() {
        let writer = Arc::new(InMemoryWorkbookWriter::new());
        let handler = ExportWorkbookHandler::new(writer.clone());

        let written = handler
            .handle(ExportWorkbookCommand {
                workbook: built_workbook(),
            })
            .unwrap();

        assert_eq!(written.location, "memory://AHP_Full_Result");
        assert_eq!(written.sheet_count, 4);
        assert_eq!(writer.written().len(), 1);
    }

    #[test]
    fn propagates_writer_failure() {
        let writer = Arc::new(InMemoryWorkbookWriter::failing(WorkbookError::IoError(
            "read-only".to_string(),
        )));
        let handler = ExportWorkbookHandler::new(writer);

        let result = handler.handle(ExportWorkbookCommand {
            workbook: built_workbook(),
        });

        assert_eq!(result, Err(WorkbookError::IoError("read-only".to_string())));
    }

    #[test]
    fn refuses_empty_workbook() {
        let writer = Arc::new(InMemoryWorkbookWriter::new());
        let handler = ExportWorkbookHandler::new(writer.clone());

        let result = handler.handle(ExportWorkbookCommand {
            workbook: Workbook {
                name: "empty".to_string(),
                sheets: Vec::new(),
            },
        });

        assert!(matches!(result, Err(WorkbookError::SerializationFailed(_))));
        assert!(writer.written().is_empty());
    }
}
