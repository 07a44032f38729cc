use std::path::Path;

use tracing::info;

use crate::domain::entities::format::{FormatParameters, SourceFile};
use crate::infra::import::csv::read_csv_rows;
use crate::infra::import::xlsx::read_first_sheet_rows;
use crate::infra::import::ImportError;

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "ods", "csv"];

/// Reads a spreadsheet into a [`SourceFile`], choosing the reader by extension.
pub fn load_source_file(path: &Path) -> Result<SourceFile, ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    let data = match ext.as_str() {
        "csv" => read_csv_rows(path)?,
        "xlsx" | "xlsm" | "xls" | "ods" => read_first_sheet_rows(path)?,
        _ => return Err(ImportError::UnsupportedExtension(ext)),
    };

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("authors")
        .to_string();
    info!(file = %path.display(), rows = data.len(), "loaded source file");

    Ok(SourceFile { filename, data })
}

fn normalize_header(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Maps every unmapped field to the first column whose header equals, or else
/// starts with, the field name. Headers are compared ignoring case and punctuation.
pub fn auto_map(config: &mut FormatParameters) {
    let headers: Vec<String> = config.file.headers().iter().map(|h| normalize_header(h)).collect();

    for mapping in config.mappings_mut() {
        if mapping.column.is_some() {
            continue;
        }
        let wanted = normalize_header(&mapping.name);
        if wanted.is_empty() {
            continue;
        }
        mapping.column = headers
            .iter()
            .position(|header| *header == wanted)
            .or_else(|| headers.iter().position(|header| header.starts_with(&wanted)));
    }
}
