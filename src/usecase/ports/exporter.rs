use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export")]
    NothingToExport,

    #[error("failed to build document: {0}")]
    Package(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Converts rendered HTML into a downloadable document.
pub trait DocumentExporter: Send + Sync {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;

    fn to_document(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}
