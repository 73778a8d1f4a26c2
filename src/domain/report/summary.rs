//! Human-readable summaries of AHP results, rendered as markdown.

use crate::domain::ahp::{HierarchyResult, MatrixEvaluation, PriorityResult};

/// Decimals shown for every number in a summary.
pub const SUMMARY_DECIMALS: usize = 4;

/// Renders evaluation results for display. Performs no computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Creates a new summary formatter.
    pub fn new() -> Self {
        Self
    }

    /// Summary of single-matrix mode.
    pub fn matrix_summary(&self, evaluation: &MatrixEvaluation) -> String {
        let mut doc = String::from("## Results\n\n");
        doc.push_str(&format!(
            "**Given Number of Criteria:** {}\n\n",
            evaluation.result.size()
        ));
        doc.push_str(&self.consistency_section(&evaluation.result));
        doc.push_str("**Priority vector (weights):**\n\n");
        doc.push_str(&format!("`{}`\n\n", self.vector(&evaluation.result.priority_vector)));
        doc.push_str("**Normalized matrix (rounded):**\n\n");
        doc.push_str(&self.normalized_table(evaluation));
        doc
    }

    /// Summary of hierarchical mode: criteria, each alternatives matrix, ranking.
    pub fn hierarchy_summary(&self, result: &HierarchyResult) -> String {
        let mut doc = String::from("## Final Results\n\n");

        doc.push_str(&format!(
            "**Criteria (n):** {}\n\n",
            result.criteria.result.size()
        ));
        doc.push_str(&self.consistency_section(&result.criteria.result));
        doc.push_str("**Criteria priority vector:**\n\n");
        doc.push_str(&format!(
            "`{}`\n\n",
            self.vector(&result.criteria.result.priority_vector)
        ));

        for (criterion, evaluation) in result.alternatives.iter().enumerate() {
            let name = result
                .criteria
                .labels
                .get(criterion)
                .unwrap_or_default();
            doc.push_str(&format!("### Alternatives under {}\n\n", name));
            doc.push_str(&self.consistency_section(&evaluation.result));
            doc.push_str(&format!(
                "**Priority vector:** `{}`\n\n",
                self.vector(&evaluation.result.priority_vector)
            ));
        }

        doc.push_str("### Composite weights & ranking\n\n");
        doc.push_str("| Rank | Alternative | Weight |\n");
        doc.push_str("|------|-------------|--------|\n");
        for entry in &result.ranking.ranking {
            doc.push_str(&format!(
                "| {} | {} | {:.*} |\n",
                entry.rank, entry.label, SUMMARY_DECIMALS, entry.weight
            ));
        }
        doc
    }

    fn consistency_section(&self, result: &PriorityResult) -> String {
        format!(
            "**λmax:** {:.p$} | **CI:** {:.p$} | **RI:** {:.p$} | **CR:** {:.p$}\n\n{}\n\n",
            result.lambda_max,
            result.ci,
            result.ri,
            result.cr,
            result.verdict().label(),
            p = SUMMARY_DECIMALS
        )
    }

    fn vector(&self, values: &[f64]) -> String {
        let parts: Vec<String> = values
            .iter()
            .map(|v| format!("{:.*}", SUMMARY_DECIMALS, v))
            .collect();
        format!("[ {} ]", parts.join(", "))
    }

    fn normalized_table(&self, evaluation: &MatrixEvaluation) -> String {
        let labels: Vec<&str> = evaluation.labels.iter().collect();
        let mut table = format!("| | {} |\n", labels.join(" | "));
        table.push_str(&format!("|---|{}\n", "---|".repeat(labels.len())));

        for (label, row) in labels.iter().zip(&evaluation.result.normalized_matrix) {
            let cells: Vec<String> = row
                .iter()
                .map(|v| format!("{:.*}", SUMMARY_DECIMALS, v))
                .collect();
            table.push_str(&format!("| {} | {} |\n", label, cells.join(" | ")));
        }
        table
    }
}
