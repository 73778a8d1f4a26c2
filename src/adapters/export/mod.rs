//! Workbook export adapters.
//!
//! - `FileWorkbookWriter` - writes JSON or YAML files to a directory
//! - `InMemoryWorkbookWriter` - captures workbooks for tests

mod file_workbook_writer;
mod in_memory_workbook_writer;

pub use file_workbook_writer::FileWorkbookWriter;
pub use in_memory_workbook_writer::InMemoryWorkbookWriter;
