//! EvaluateMatrixHandler - Single-matrix mode.

use tracing::{info, warn};

use crate::domain::ahp::{AhpError, AhpSettings, MatrixEvaluation, MatrixRole};
use crate::domain::foundation::LabelSet;
use crate::domain::report::{SummaryFormatter, Workbook, WorkbookBuilder};

use super::MatrixInput;

/// Command to evaluate one pairwise matrix.
#[derive(Debug, Clone)]
pub struct EvaluateMatrixCommand {
    pub matrix: MatrixInput,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateMatrixResult {
    pub evaluation: MatrixEvaluation,
    /// Markdown summary for display.
    pub summary: String,
    /// Export payload, ready for a [`WorkbookWriter`](crate::ports::WorkbookWriter).
    pub workbook: Workbook,
}

/// Handler for single-matrix evaluation.
pub struct EvaluateMatrixHandler {
    settings: AhpSettings,
    formatter: SummaryFormatter,
}

impl EvaluateMatrixHandler {
    pub fn new(settings: AhpSettings) -> Self {
        Self {
            settings,
            formatter: SummaryFormatter::new(),
        }
    }

    pub fn handle(&self, cmd: EvaluateMatrixCommand) -> Result<EvaluateMatrixResult, AhpError> {
        // 1. Build the reciprocal matrix from the upper triangle
        let matrix = cmd.matrix.to_matrix(&self.settings)?;

        // 2. Resolve labels
        let labels = cmd
            .matrix
            .resolve_labels("labels", LabelSet::CRITERIA_PREFIX)?;

        // 3. Validate and compute
        let evaluation = MatrixEvaluation::evaluate(&matrix, labels, MatrixRole::Single, &self.settings)
            .map_err(|err| {
                warn!(error = %err, "matrix evaluation rejected");
                err
            })?;

        info!(
            size = evaluation.result.size(),
            cr = evaluation.result.cr,
            consistent = evaluation.result.consistent,
            "matrix evaluated"
        );

        // 4. Format
        let summary = self.formatter.matrix_summary(&evaluation);
        let workbook = WorkbookBuilder::single(&evaluation);

        Ok(EvaluateMatrixResult {
            evaluation,
            summary,
            workbook,
        })
    }
}
