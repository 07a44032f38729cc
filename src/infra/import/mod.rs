pub mod csv;
pub mod xlsx;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("failed to read csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("workbook {0} has no worksheets")]
    NoWorksheet(PathBuf),
}

/// Drops trailing rows whose cells are all blank.
pub(crate) fn trim_trailing_empty_rows(rows: &mut Vec<Vec<String>>) {
    while rows
        .last()
        .is_some_and(|row| row.iter().all(|cell| cell.trim().is_empty()))
    {
        rows.pop();
    }
}
