//! File-based Workbook Writer
//!
//! Writes each workbook as a single file named after the workbook: an Excel
//! spreadsheet with one worksheet per sheet, or a JSON/YAML document that a
//! script can pick up.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook as XlsxWorkbook, XlsxError};
use tracing::info;

use crate::domain::report::{SheetCell, Workbook};
use crate::ports::{WorkbookError, WorkbookFormat, WorkbookWriter, WrittenWorkbook};

/// Writes workbooks into a directory.
#[derive(Debug, Clone)]
pub struct FileWorkbookWriter {
    base_path: PathBuf,
    format: WorkbookFormat,
}

impl FileWorkbookWriter {
    /// Create a writer targeting `base_path`.
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let writer = FileWorkbookWriter::new("./exports", WorkbookFormat::Xlsx);
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P, format: WorkbookFormat) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            format,
        }
    }

    /// The encoding this writer produces.
    pub fn format(&self) -> WorkbookFormat {
        self.format
    }

    /// Path the given workbook would be written to.
    pub fn file_path(&self, workbook: &Workbook) -> PathBuf {
        self.base_path
            .join(format!("{}.{}", workbook.name, self.format.extension()))
    }

    fn encode(&self, workbook: &Workbook) -> Result<Vec<u8>, WorkbookError> {
        match self.format {
            WorkbookFormat::Xlsx => encode_spreadsheet(workbook)
                .map_err(|e| WorkbookError::SerializationFailed(e.to_string())),
            WorkbookFormat::Json => serde_json::to_vec_pretty(workbook)
                .map_err(|e| WorkbookError::SerializationFailed(e.to_string())),
            WorkbookFormat::Yaml => serde_yaml::to_string(workbook)
                .map(String::into_bytes)
                .map_err(|e| WorkbookError::SerializationFailed(e.to_string())),
        }
    }
}

/// Lays every sheet out as a worksheet, keeping numbers numeric.
fn encode_spreadsheet(workbook: &Workbook) -> Result<Vec<u8>, XlsxError> {
    let mut book = XlsxWorkbook::new();

    for sheet in &workbook.sheets {
        let worksheet = book.add_worksheet();
        worksheet.set_name(sheet.name.as_str())?;

        for (row, cells) in (0u32..).zip(&sheet.rows) {
            for (col, cell) in (0u16..).zip(cells) {
                match cell {
                    SheetCell::Integer(value) => worksheet.write_number(row, col, *value as f64)?,
                    SheetCell::Number(value) => worksheet.write_number(row, col, *value)?,
                    SheetCell::Text(value) => worksheet.write_string(row, col, value.as_str())?,
                };
            }
        }
    }

    book.save_to_buffer()
}

/// Writes `body` to a sibling staging file, then renames it over `target`.
///
/// A failure removes the staging file and leaves any previous export intact.
fn write_atomically(target: &Path, body: &[u8]) -> Result<(), WorkbookError> {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = target.with_file_name(format!(".{}.partial", file_name));

    let result = fs::write(&staging, body).and_then(|_| fs::rename(&staging, target));
    if let Err(e) = result {
        let _ = fs::remove_file(&staging);
        return Err(WorkbookError::IoError(e.to_string()));
    }
    Ok(())
}

impl WorkbookWriter for FileWorkbookWriter {
    fn write(&self, workbook: &Workbook) -> Result<WrittenWorkbook, WorkbookError> {
        // Encode before touching the disk so a failure leaves no file behind
        let body = self.encode(workbook)?;

        fs::create_dir_all(&self.base_path).map_err(|e| WorkbookError::IoError(e.to_string()))?;

        let file_path = self.file_path(workbook);
        write_atomically(&file_path, &body)?;

        let location = file_path.display().to_string();
        info!(
            workbook = %workbook.name,
            sheets = workbook.sheets.len(),
            format = %self.format,
            location = %location,
            "workbook exported"
        );

        Ok(WrittenWorkbook {
            location,
            format: self.format,
            sheet_count: workbook.sheets.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::Sheet;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    fn sample_workbook() -> Workbook {
        let mut prio = Sheet::new(
            "Priority Vector",
            vec![SheetCell::text("Criteria"), SheetCell::text("Weight")],
        );
        prio.push_row(vec![SheetCell::text("C1"), SheetCell::Number(0.75)]);
        prio.push_row(vec![SheetCell::text("C2"), SheetCell::Number(0.25)]);

        Workbook {
            name: "AHP_Full_Result".to_string(),
            sheets: vec![prio],
        }
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_spreadsheet_with_typed_cells() {
        let dir = TempDir::new().unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Xlsx);
        let mut workbook = sample_workbook();
        let mut ranking = Sheet::new("Final_Ranking", vec![SheetCell::text("Rank")]);
        ranking.push_row(vec![SheetCell::Integer(1)]);
        workbook.sheets.push(ranking);

        let written = writer.write(&workbook).unwrap();

        let path = dir.path().join("AHP_Full_Result.xlsx");
        assert_eq!(written.location, path.display().to_string());
        assert_eq!(written.format, WorkbookFormat::Xlsx);

        let mut book: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(
            book.sheet_names(),
            vec!["Priority Vector".to_string(), "Final_Ranking".to_string()]
        );

        let prio = book.worksheet_range("Priority Vector").unwrap();
        assert_eq!(prio.get_value((0, 1)), Some(&Data::String("Weight".to_string())));
        assert_eq!(prio.get_value((1, 0)), Some(&Data::String("C1".to_string())));
        assert_eq!(prio.get_value((1, 1)), Some(&Data::Float(0.75)));

        let ranking = book.worksheet_range("Final_Ranking").unwrap();
        assert_eq!(ranking.get_value((1, 0)), Some(&Data::Float(1.0)));
    }

    #[test]
    fn rejects_sheet_names_excel_cannot_hold() {
        let dir = TempDir::new().unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Xlsx);
        let mut workbook = sample_workbook();
        workbook.sheets[0].name = "Bad/Name".to_string();

        let result = writer.write(&workbook);

        assert!(matches!(result, Err(WorkbookError::SerializationFailed(_))));
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn leaves_no_staging_file_after_success() {
        let dir = TempDir::new().unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Json);

        writer.write(&sample_workbook()).unwrap();

        assert_eq!(dir_entries(dir.path()), vec!["AHP_Full_Result.json"]);
    }

    #[test]
    fn failed_rename_leaves_no_partial_file() {
        let dir = TempDir::new().unwrap();
        // A directory squatting on the target path makes the final rename fail
        fs::create_dir(dir.path().join("AHP_Full_Result.json")).unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Json);

        let result = writer.write(&sample_workbook());

        assert!(matches!(result, Err(WorkbookError::IoError(_))));
        assert_eq!(dir_entries(dir.path()), vec!["AHP_Full_Result.json"]);
        assert!(dir.path().join("AHP_Full_Result.json").is_dir());
    }

    #[test]
    fn writes_json_named_after_workbook() {
        let dir = TempDir::new().unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Json);

        let written = writer.write(&sample_workbook()).unwrap();

        let expected = dir.path().join("AHP_Full_Result.json");
        assert_eq!(written.location, expected.display().to_string());
        assert_eq!(written.format, WorkbookFormat::Json);
        assert_eq!(written.sheet_count, 1);

        let content = fs::read_to_string(expected).unwrap();
        let parsed: Workbook = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample_workbook());
    }

    #[test]
    fn writes_yaml_when_configured() {
        let dir = TempDir::new().unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Yaml);

        writer.write(&sample_workbook()).unwrap();

        let content = fs::read_to_string(dir.path().join("AHP_Full_Result.yaml")).unwrap();
        assert!(content.contains("Priority Vector"));
        let parsed: Workbook = serde_yaml::from_str(&content).unwrap();
        assert_eq!(parsed.sheets[0].data_rows().len(), 2);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("exports").join("ahp");
        let writer = FileWorkbookWriter::new(&nested, WorkbookFormat::Json);

        writer.write(&sample_workbook()).unwrap();

        assert!(nested.join("AHP_Full_Result.json").exists());
    }

    #[test]
    fn overwrites_previous_export() {
        let dir = TempDir::new().unwrap();
        let writer = FileWorkbookWriter::new(dir.path(), WorkbookFormat::Json);

        writer.write(&sample_workbook()).unwrap();
        let mut smaller = sample_workbook();
        smaller.sheets[0].rows.truncate(2);
        writer.write(&smaller).unwrap();

        let content = fs::read_to_string(dir.path().join("AHP_Full_Result.json")).unwrap();
        let parsed: Workbook = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.sheets[0].data_rows().len(), 1);
    }

    #[test]
    fn reports_io_error_when_target_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let writer = FileWorkbookWriter::new(&blocker, WorkbookFormat::Json);

        let result = writer.write(&sample_workbook());

        assert!(matches!(result, Err(WorkbookError::IoError(_))));
    }
}
