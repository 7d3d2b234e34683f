use careers_exporter::ExportError;
use thiserror::Error;

/// Run-level failures. Any of these ends the run without an output file.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid selector {0}")]
    Selector(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{0}")]
    NoData(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// A posting section whose markup broke an expected traversal step.
/// Only that posting is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("heading '{heading}' has no parent element")]
    DetachedHeading { heading: String },
}
