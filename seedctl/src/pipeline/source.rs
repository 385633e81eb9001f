//! Read raw records from CSV and Excel sources

use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::json;

/// One row of input data before field-set normalization, as a JSON object
pub type RawRecord = serde_json::Value;

/// Error while obtaining raw records from a file
#[derive(Debug)]
pub enum SourceError {
    /// The supplied path does not resolve to an existing file
    NotFound { path: PathBuf },
    /// The file exists but cannot be decoded as tabular data
    Parse { path: PathBuf, detail: String },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound { path } => {
                write!(f, "source file not found: {}", path.display())
            }
            SourceError::Parse { path, detail } => {
                write!(f, "cannot read {}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl SourceError {
    fn parse(path: &Path, detail: impl std::fmt::Display) -> Self {
        SourceError::Parse {
            path: path.to_path_buf(),
            detail: detail.to_string(),
        }
    }
}

/// A sheet's raw text content: header row plus data rows.
/// Used by the splitter, which re-emits rows verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn ensure_exists(path: &Path) -> Result<(), SourceError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SourceError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

fn is_excel(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls")
    )
}

/// Read a CSV file into raw records.
///
/// Every cell is kept as text (empty cells become null) so values like phone
/// numbers keep their leading zeros instead of round-tripping through floats.
pub fn read_csv(path: &Path) -> Result<Vec<RawRecord>, SourceError> {
    let table = read_csv_table(path)?;
    let records = table
        .rows
        .iter()
        .map(|row| row_to_record(&table.headers, row))
        .collect();
    Ok(records)
}

/// Read one sheet of an Excel workbook into raw records.
///
/// `sheet` selects a worksheet by name; `None` takes the first one. The first
/// row is the header. Cells keep their native type; fully empty rows are
/// dropped, matching what spreadsheet users expect from trailing blanks.
pub fn read_excel(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRecord>, SourceError> {
    ensure_exists(path)?;
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| SourceError::parse(path, e))?;
    let sheet_name = resolve_sheet(&workbook, path, sheet)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SourceError::parse(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for row in rows {
        let mut object = serde_json::Map::new();
        for (i, name) in headers.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let cell = row.get(i).map(cell_to_json).unwrap_or(serde_json::Value::Null);
            object.insert(name.clone(), cell);
        }
        if object.values().all(|v| v.is_null()) {
            continue;
        }
        records.push(serde_json::Value::Object(object));
    }
    Ok(records)
}

/// Read the raw text table of a CSV file or Excel sheet, chosen by extension
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table, SourceError> {
    if is_excel(path) {
        read_excel_table(path, sheet)
    } else {
        read_csv_table(path)
    }
}

/// Sheet names of a workbook, in workbook order
pub fn sheet_names(path: &Path) -> Result<Vec<String>, SourceError> {
    ensure_exists(path)?;
    let workbook: Xlsx<_> = open_workbook(path).map_err(|e| SourceError::parse(path, e))?;
    Ok(workbook.sheet_names().to_vec())
}

fn read_csv_table(path: &Path) -> Result<Table, SourceError> {
    ensure_exists(path)?;
    let mut reader = csv::Reader::from_path(path).map_err(|e| SourceError::parse(path, e))?;
    let headers = reader
        .headers()
        .map_err(|e| SourceError::parse(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| SourceError::parse(path, e))?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(Table { headers, rows })
}

fn read_excel_table(path: &Path, sheet: Option<&str>) -> Result<Table, SourceError> {
    ensure_exists(path)?;
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| SourceError::parse(path, e))?;
    let sheet_name = resolve_sheet(&workbook, path, sheet)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SourceError::parse(path, e))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();
    Ok(Table { headers, rows })
}

fn resolve_sheet<R>(
    workbook: &Xlsx<R>,
    path: &Path,
    sheet: Option<&str>,
) -> Result<String, SourceError>
where
    R: std::io::Read + std::io::Seek,
{
    let names = workbook.sheet_names();
    match sheet {
        Some(name) => {
            if names.iter().any(|n| n == name) {
                Ok(name.to_string())
            } else {
                Err(SourceError::parse(
                    path,
                    format!("no sheet named '{}'", name),
                ))
            }
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| SourceError::parse(path, "workbook has no sheets")),
    }
}

fn row_to_record(headers: &[String], row: &[String]) -> RawRecord {
    let mut object = serde_json::Map::new();
    for (i, name) in headers.iter().enumerate() {
        if name.is_empty() {
            continue;
        }
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let value = if cell.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(cell.to_string())
        };
        object.insert(name.clone(), value);
    }
    serde_json::Value::Object(object)
}

fn cell_to_json(cell: &Data) -> serde_json::Value {
    match cell {
        Data::Empty => serde_json::Value::Null,
        Data::String(s) if s.trim().is_empty() => serde_json::Value::Null,
        Data::String(s) => serde_json::Value::String(s.clone()),
        Data::Int(i) => json!(*i),
        Data::Float(f) => json!(*f),
        Data::Bool(b) => serde_json::Value::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => serde_json::Value::String(naive.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serde_json::Value::Null,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => serde_json::Value::String(s.clone()),
        Data::Error(_) => serde_json::Value::Null,
    }
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => naive.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => String::new(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_csv_keeps_cells_as_text() {
        let file = write_csv("empId,phno\nEMP001,0099112233\n");
        let records = read_csv(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        // Leading zero survives because the cell never becomes numeric
        assert_eq!(records[0]["phno"], json!("0099112233"));
    }

    #[test]
    fn test_read_csv_empty_cell_is_null() {
        let file = write_csv("empId,phno\nEMP001,\n");
        let records = read_csv(file.path()).unwrap();
        assert_eq!(records[0]["phno"], json!(null));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let err = read_csv(Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_read_table_preserves_row_order() {
        let file = write_csv("id\n1\n2\n3\n");
        let table = read_table(file.path(), None).unwrap();
        assert_eq!(table.headers, vec!["id"]);
        assert_eq!(table.rows, vec![vec!["1"], vec!["2"], vec!["3"]]);
    }

    #[test]
    fn test_read_excel_typed_cells() {
        use rust_xlsxwriter::Workbook;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "name").unwrap();
        sheet.write_string(0, 1, "count").unwrap();
        sheet.write_string(1, 0, "workshop").unwrap();
        sheet.write_number(1, 1, 25.0).unwrap();
        workbook.save(&path).unwrap();

        let records = read_excel(&path, None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], json!("workshop"));
        assert_eq!(records[0]["count"], json!(25.0));
    }

    #[test]
    fn test_read_excel_missing_sheet() {
        use rust_xlsxwriter::Workbook;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");
        let mut workbook = Workbook::new();
        workbook.add_worksheet().write_string(0, 0, "a").unwrap();
        workbook.save(&path).unwrap();

        let err = read_excel(&path, Some("2024 Published")).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains("no sheet named"));
    }
}
