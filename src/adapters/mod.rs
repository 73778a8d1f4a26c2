//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `export` - Workbook writers (filesystem, in-memory)

pub mod export;

pub use export::{FileWorkbookWriter, InMemoryWorkbookWriter};
