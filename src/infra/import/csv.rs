use std::path::Path;

use super::{trim_trailing_empty_rows, ImportError};

/// All records of a CSV file, header row included, as strings.
pub fn read_csv_rows(csv_path: &Path) -> Result<Vec<Vec<String>>, ImportError> {
    let to_error = |source| ImportError::Csv {
        path: csv_path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .map_err(to_error)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(to_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    trim_trailing_empty_rows(&mut rows);

    Ok(rows)
}
