//! EvaluateHierarchyHandler - Criteria matrix plus alternatives matrices.

use tracing::{info, warn};

use crate::domain::ahp::{AhpError, AhpSettings, HierarchyModel, HierarchyResult, PairwiseMatrix};
use crate::domain::foundation::LabelSet;
use crate::domain::report::{SummaryFormatter, Workbook, WorkbookBuilder};

use super::MatrixInput;

/// Command to evaluate a full decision hierarchy.
#[derive(Debug, Clone)]
pub struct EvaluateHierarchyCommand {
    pub criteria: MatrixInput,
    /// One matrix per criterion, in criteria order.
    pub alternatives: Vec<MatrixInput>,
    pub alternative_labels: Option<Vec<String>>,
}

/// Result of a successful hierarchy evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateHierarchyResult {
    pub result: HierarchyResult,
    pub summary: String,
    pub workbook: Workbook,
}

/// Handler for hierarchical evaluation.
pub struct EvaluateHierarchyHandler {
    settings: AhpSettings,
    formatter: SummaryFormatter,
}

impl EvaluateHierarchyHandler {
    pub fn new(settings: AhpSettings) -> Self {
        Self {
            settings,
            formatter: SummaryFormatter::new(),
        }
    }

    pub fn handle(&self, cmd: EvaluateHierarchyCommand) -> Result<EvaluateHierarchyResult, AhpError> {
        // 1. Assemble the model
        let model = self.build_model(cmd)?;

        // 2. Evaluate all matrices and aggregate
        let result = model.evaluate(&self.settings).map_err(|err| {
            warn!(error = %err, "hierarchy evaluation rejected");
            err
        })?;

        info!(
            criteria = model.criteria_count(),
            alternatives = model.alternative_count(),
            leader = result.ranking.leader().map(|r| r.label.as_str()).unwrap_or_default(),
            "hierarchy evaluated"
        );

        // 3. Format
        let summary = self.formatter.hierarchy_summary(&result);
        let workbook = WorkbookBuilder::hierarchy(&result);

        Ok(EvaluateHierarchyResult {
            result,
            summary,
            workbook,
        })
    }

    fn build_model(&self, cmd: EvaluateHierarchyCommand) -> Result<HierarchyModel, AhpError> {
        let criteria = cmd.criteria.to_matrix(&self.settings)?;
        let criteria_labels = cmd
            .criteria
            .resolve_labels("criteria_labels", LabelSet::CRITERIA_PREFIX)?;

        // Explicit labels fix the alternative count; otherwise the first matrix does
        let alternative_count = cmd
            .alternative_labels
            .as_ref()
            .map(Vec::len)
            .or_else(|| cmd.alternatives.first().map(MatrixInput::size))
            .unwrap_or(0);
        let alternative_labels = LabelSet::or_generated(
            "alternative_labels",
            cmd.alternative_labels,
            LabelSet::ALTERNATIVE_PREFIX,
            alternative_count,
        )?;

        let alternatives = cmd
            .alternatives
            .iter()
            .map(|input| input.to_matrix(&self.settings))
            .collect::<Result<Vec<PairwiseMatrix>, _>>()?;

        Ok(HierarchyModel {
            criteria,
            alternatives,
            criteria_labels,
            alternative_labels,
        })
    }
}
