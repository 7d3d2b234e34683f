//! Workbook exporter for scraped job postings.
//!
//! Writes a `Jobs` sheet (one styled row per posting) and a `Summary` sheet
//! (run metadata and counts by category and location) into a single `.xlsx`.

mod error;
mod sheets;
pub mod summary;
pub mod table;

use std::fs;
use std::path::{Path, PathBuf};

use careers_common::{CaptureInfo, JobRecord};
use rust_xlsxwriter::Workbook;
use tracing::{error, info};

pub use error::ExportError;
pub use sheets::{DATA_ROW_HEIGHT, JOBS_SHEET};
pub use summary::SUMMARY_SHEET;
pub use table::JobTable;

/// Base name used when the caller doesn't pick one.
pub const DEFAULT_FILE_NAME: &str = "Techversant_Jobs";

const XLSX_EXTENSION: &str = ".xlsx";

/// Appends `.xlsx` unless the name already ends with it.
pub fn output_path(file_name: &str) -> PathBuf {
    if file_name.ends_with(XLSX_EXTENSION) {
        PathBuf::from(file_name)
    } else {
        PathBuf::from(format!("{file_name}{XLSX_EXTENSION}"))
    }
}

/// Builds both sheets in memory.
pub fn build_workbook(jobs: &[JobRecord], capture: &CaptureInfo) -> Result<Workbook, ExportError> {
    if jobs.is_empty() {
        return Err(ExportError::NoData);
    }

    let table = JobTable::project(jobs)?;
    let styles = sheets::Styles::new();

    let mut workbook = Workbook::new();
    workbook.push_worksheet(sheets::jobs_sheet(&table, &styles)?);
    let rows = summary::summary_rows(&table, capture);
    workbook.push_worksheet(summary::summary_sheet(&rows, &styles)?);

    Ok(workbook)
}

/// Saves `jobs` to `file_name` (default [`DEFAULT_FILE_NAME`]) and returns the
/// path written. Nothing is left on disk when saving fails.
pub fn save_jobs(
    jobs: &[JobRecord],
    capture: &CaptureInfo,
    file_name: Option<&str>,
) -> Result<PathBuf, ExportError> {
    let path = output_path(file_name.unwrap_or(DEFAULT_FILE_NAME));

    let result = build_workbook(jobs, capture)
        .and_then(|mut workbook| Ok(workbook.save_to_buffer()?))
        .and_then(|bytes| write_atomically(&path, &bytes));

    match result {
        Ok(()) => {
            info!("✅ Successfully saved {} jobs to '{}'", jobs.len(), path.display());
            Ok(path)
        }
        Err(e) => {
            error!("❌ Error saving to Excel: {}", e);
            Err(e)
        }
    }
}

/// Writes to a sibling temp file, then renames it over the target.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    if let Err(e) = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path)) {
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }
    Ok(())
}
