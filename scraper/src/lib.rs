//! Techversant careers page scraper.
//!
//! Fetches the talent page once, extracts every job posting and saves them
//! to an `.xlsx` workbook through `careers-exporter`.

pub mod config;
mod error;
pub mod extract;
pub mod fetch;
pub mod page;
pub mod validate;

use std::path::PathBuf;

use careers_common::{CaptureInfo, JobRecord};
use chrono::Local;
use tracing::{error, info, warn};

pub use config::ScrapeConfig;
pub use error::{ScrapeError, StructuralError};
pub use extract::JobExtractor;
pub use fetch::Fetcher;
pub use page::Page;
pub use validate::{validate_jobs, ValidationReport};

/// Runs a full scrape and returns the written workbook, or `None` after
/// logging why the run failed.
pub fn run(config: &ScrapeConfig) -> Option<PathBuf> {
    match scrape(config) {
        Ok(path) => {
            info!("✅ Scraping completed successfully!");
            info!("📁 File saved as: {}", path.display());
            Some(path)
        }
        Err(ScrapeError::Transport(e)) => {
            error!("❌ Error fetching webpage: {}", e);
            info!("💡 Check your internet connection and the website URL");
            None
        }
        Err(e) => {
            error!("❌ {}", e);
            None
        }
    }
}

/// Fetch, extract, validate and export.
pub fn scrape(config: &ScrapeConfig) -> Result<PathBuf, ScrapeError> {
    info!("🔍 Starting job scraping from {}...", config.source_name);

    let capture = config.capture_at(Local::now().naive_local());
    let html = Fetcher::new(config)?.fetch(&config.base_url)?;

    process_page(&html, config, &capture)
}

/// Everything after the download: parse, extract, validate and save.
pub fn process_page(
    html: &str,
    config: &ScrapeConfig,
    capture: &CaptureInfo,
) -> Result<PathBuf, ScrapeError> {
    let page = Page::parse(html)?;

    if page.has_pagination() {
        info!("📄 Pagination detected - currently scraping first page only");
    } else {
        info!("📄 No pagination detected - scraping all available jobs");
    }

    let sections = page.sections();
    if sections.is_empty() {
        return Err(ScrapeError::NoData(
            "No job sections found. The website structure might have changed.".to_string(),
        ));
    }
    info!("📋 Found {} job postings", sections.len());

    let extractor = JobExtractor::new()?;
    let jobs = collect_jobs(&sections, |section| extractor.extract(*section, capture));
    if jobs.is_empty() {
        return Err(ScrapeError::NoData("No job data extracted".to_string()));
    }

    if !validate_jobs(&jobs, config.completeness_threshold).healthy {
        warn!("⚠️  Data validation concerns detected");
    }

    let path = careers_exporter::save_jobs(&jobs, capture, Some(config.output_file.as_str()))?;
    info!("📊 Total jobs scraped: {}", jobs.len());
    Ok(path)
}

/// Extracts every section, dropping (and logging) the ones that fail.
pub fn collect_jobs<S, F>(sections: &[S], mut extract: F) -> Vec<JobRecord>
where
    F: FnMut(&S) -> Result<JobRecord, StructuralError>,
{
    let mut jobs = Vec::with_capacity(sections.len());

    for (index, section) in sections.iter().enumerate() {
        let number = index + 1;
        info!("📝 Processing job {}/{}...", number, sections.len());
        match extract(section) {
            Ok(job) => jobs.push(job),
            Err(e) => warn!("⚠️  Skipped job {} due to HTML structure issue: {}", number, e),
        }
    }

    info!(
        "✅ Successfully extracted {}/{} jobs",
        jobs.len(),
        sections.len()
    );
    jobs
}
