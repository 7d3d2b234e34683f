use thiserror::Error;

/// Errors raised while turning jobs into a workbook on disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No job data provided to save")]
    NoData,

    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record projection failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
