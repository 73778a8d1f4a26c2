//! Tabular export payload: one sheet per logical table, header row first.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{HierarchyResult, MatrixEvaluation, PriorityResult, RankingResult};

/// Default file stem for single-matrix exports.
pub const SINGLE_WORKBOOK_NAME: &str = "AHP_Full_Result";

/// Default file stem for hierarchical exports.
pub const HIERARCHY_WORKBOOK_NAME: &str = "AHP_Criteria_Alternatives_Result";

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetCell {
    Integer(u64),
    Number(f64),
    Text(String),
}

impl SheetCell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        SheetCell::Text(value.into())
    }

    /// Returns the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SheetCell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SheetCell::Number(n) => Some(*n),
            SheetCell::Integer(i) => Some(*i as f64),
            SheetCell::Text(_) => None,
        }
    }
}

/// A named sheet as an array of rows; the first row is the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<SheetCell>>,
}

impl Sheet {
    /// Creates a sheet with a header row.
    pub fn new(name: impl Into<String>, header: Vec<SheetCell>) -> Self {
        Self {
            name: name.into(),
            rows: vec![header],
        }
    }

    /// Appends a data row.
    pub fn push_row(&mut self, row: Vec<SheetCell>) {
        self.rows.push(row);
    }

    /// Returns the header row.
    pub fn header(&self) -> &[SheetCell] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the rows after the header.
    pub fn data_rows(&self) -> &[Vec<SheetCell>] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// An ordered collection of sheets ready for a spreadsheet writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// File stem suggested to the writer.
    pub name: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Finds a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Returns the sheet names in order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Sheet names for one matrix's group of four sheets.
struct SheetNames {
    pairwise: String,
    normalized: String,
    priorities: String,
    consistency: String,
    weight_column: &'static str,
}

/// Turns evaluation results into workbook payloads. Performs no computation.
pub struct WorkbookBuilder;

impl WorkbookBuilder {
    /// Workbook for single-matrix mode.
    pub fn single(evaluation: &MatrixEvaluation) -> Workbook {
        let names = SheetNames {
            pairwise: "Pairwise Matrix".to_string(),
            normalized: "Normalized Matrix".to_string(),
            priorities: "Priority Vector".to_string(),
            consistency: "Consistency Info".to_string(),
            weight_column: "Criteria",
        };

        Workbook {
            name: SINGLE_WORKBOOK_NAME.to_string(),
            sheets: Self::matrix_sheets(evaluation, &names),
        }
    }

    /// Workbook for hierarchical mode: criteria group, one group per
    /// criterion, then the final ranking.
    pub fn hierarchy(result: &HierarchyResult) -> Workbook {
        let criteria_names = SheetNames {
            pairwise: "Criteria_Pairwise".to_string(),
            normalized: "Criteria_Normalized".to_string(),
            priorities: "Criteria_Priorities".to_string(),
            consistency: "Criteria_Consistency".to_string(),
            weight_column: "Criteria",
        };
        let mut sheets = Self::matrix_sheets(&result.criteria, &criteria_names);

        for (idx, evaluation) in result.alternatives.iter().enumerate() {
            let k = idx + 1;
            let names = SheetNames {
                pairwise: format!("Alt_Pair_C{}", k),
                normalized: format!("Alt_Norm_C{}", k),
                priorities: format!("Alt_Prio_C{}", k),
                consistency: format!("Alt_Cons_C{}", k),
                weight_column: "Alternative",
            };
            sheets.extend(Self::matrix_sheets(evaluation, &names));
        }

        sheets.push(Self::ranking_sheet(&result.ranking));

        Workbook {
            name: HIERARCHY_WORKBOOK_NAME.to_string(),
            sheets,
        }
    }

    fn matrix_sheets(evaluation: &MatrixEvaluation, names: &SheetNames) -> Vec<Sheet> {
        vec![
            Self::pairwise_sheet(&names.pairwise, evaluation),
            Self::normalized_sheet(&names.normalized, evaluation),
            Self::priority_sheet(&names.priorities, names.weight_column, evaluation),
            Self::consistency_sheet(&names.consistency, &evaluation.result),
        ]
    }

    fn label_header(evaluation: &MatrixEvaluation) -> Vec<SheetCell> {
        std::iter::once(SheetCell::text(""))
            .chain(evaluation.labels.iter().map(SheetCell::text))
            .collect()
    }

    fn pairwise_sheet(name: &str, evaluation: &MatrixEvaluation) -> Sheet {
        let mut sheet = Sheet::new(name, Self::label_header(evaluation));
        for (label, row) in evaluation.labels.iter().zip(&evaluation.pairwise) {
            let cells = std::iter::once(SheetCell::text(label))
                .chain(row.iter().map(|raw| SheetCell::text(raw.as_str())))
                .collect();
            sheet.push_row(cells);
        }
        sheet
    }

    fn normalized_sheet(name: &str, evaluation: &MatrixEvaluation) -> Sheet {
        let mut sheet = Sheet::new(name, Self::label_header(evaluation));
        for (label, row) in evaluation
            .labels
            .iter()
            .zip(&evaluation.result.normalized_matrix)
        {
            let cells = std::iter::once(SheetCell::text(label))
                .chain(row.iter().map(|v| SheetCell::Number(*v)))
                .collect();
            sheet.push_row(cells);
        }
        sheet
    }

    fn priority_sheet(name: &str, item_column: &str, evaluation: &MatrixEvaluation) -> Sheet {
        let mut sheet = Sheet::new(
            name,
            vec![SheetCell::text(item_column), SheetCell::text("Weight")],
        );
        for (label, weight) in evaluation
            .labels
            .iter()
            .zip(&evaluation.result.priority_vector)
        {
            sheet.push_row(vec![SheetCell::text(label), SheetCell::Number(*weight)]);
        }
        sheet
    }

    fn consistency_sheet(name: &str, result: &PriorityResult) -> Sheet {
        let mut sheet = Sheet::new(name, vec![SheetCell::text("Metric"), SheetCell::text("Value")]);
        for (metric, value) in [
            ("lambda_max", result.lambda_max),
            ("CI", result.ci),
            ("RI", result.ri),
            ("CR", result.cr),
        ] {
            sheet.push_row(vec![SheetCell::text(metric), SheetCell::Number(value)]);
        }
        sheet
    }

    fn ranking_sheet(ranking: &RankingResult) -> Sheet {
        let mut sheet = Sheet::new(
            "Final_Ranking",
            vec![
                SheetCell::text("Rank"),
                SheetCell::text("Alternative"),
                SheetCell::text("Weight"),
            ],
        );
        for entry in &ranking.ranking {
            sheet.push_row(vec![
                SheetCell::Integer(entry.rank as u64),
                SheetCell::text(entry.label.as_str()),
                SheetCell::Number(entry.weight),
            ]);
        }
        sheet
    }
}
