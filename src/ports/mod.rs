//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WorkbookWriter` - Spreadsheet-writing collaborator for exports

mod workbook_writer;

pub use workbook_writer::{WorkbookError, WorkbookFormat, WorkbookWriter, WrittenWorkbook};
