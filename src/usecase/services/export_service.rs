use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::usecase::ports::exporter::{DocumentExporter, ExportError};
use crate::usecase::services::preview_service::PreviewState;

/// Replaces a trailing extension with `new_ext`, or appends it when there is none.
pub fn export_filename(filename: &str, new_ext: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot)
            if dot + 1 < filename.len()
                && !filename[dot + 1..].contains(['/', '\\']) =>
        {
            &filename[..dot]
        }
        _ => filename,
    };
    format!("{stem}.{new_ext}")
}

pub struct ExportService {
    exporter: Arc<dyn DocumentExporter>,
}

impl ExportService {
    pub fn new(exporter: Arc<dyn DocumentExporter>) -> Self {
        Self { exporter }
    }

    /// Suggested output name for the current source file.
    pub fn suggested_filename(&self, preview: &PreviewState) -> Option<String> {
        preview
            .config()
            .map(|config| export_filename(&config.file.filename, self.exporter.extension()))
    }

    /// The rendered preview as document bytes.
    pub fn render_document(&self, preview: &PreviewState) -> Result<Vec<u8>, ExportError> {
        let has_rows = preview.config().is_some_and(|config| config.file.data.len() > 1);
        let rendered = preview
            .rendered()
            .filter(|rendered| has_rows && !rendered.markup.is_empty())
            .ok_or(ExportError::NothingToExport)?;

        self.exporter.to_document(&rendered.markup.to_html_document())
    }

    pub fn export_to(&self, preview: &PreviewState, path: &Path) -> Result<(), ExportError> {
        let bytes = self.render_document(preview)?;
        std::fs::write(path, &bytes).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(file = %path.display(), bytes = bytes.len(), "exported author list");
        Ok(())
    }
}
