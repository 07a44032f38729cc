use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::{trim_trailing_empty_rows, ImportError};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Rows of the first worksheet, header row included, as strings.
pub fn read_first_sheet_rows(workbook_path: &Path) -> Result<Vec<Vec<String>>, ImportError> {
    let to_error = |message: String| ImportError::Workbook {
        path: workbook_path.to_path_buf(),
        message,
    };

    let mut workbook =
        open_workbook_auto(workbook_path).map_err(|err| to_error(err.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::NoWorksheet(workbook_path.to_path_buf()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|err| to_error(format!("sheet {sheet_name}: {err}")))?;

    let mut rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect();
    trim_trailing_empty_rows(&mut rows);

    Ok(rows)
}
