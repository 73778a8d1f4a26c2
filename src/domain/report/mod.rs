//! Report Module - Formatting of AHP results for display and export.
//!
//! Pure transformations only: summaries for humans and workbook payloads
//! for a spreadsheet-writing collaborator. No numbers are computed here.

mod summary;
mod workbook;

pub use summary::{SummaryFormatter, SUMMARY_DECIMALS};
pub use workbook::{
    Sheet, SheetCell, Workbook, WorkbookBuilder, HIERARCHY_WORKBOOK_NAME, SINGLE_WORKBOOK_NAME,
};
