use std::time::Duration;

use careers_common::{CaptureInfo, TIMESTAMP_FORMAT};
use careers_exporter::DEFAULT_FILE_NAME;
use chrono::NaiveDateTime;

pub const BASE_URL: &str = "https://techversantinfotech.com/talent/";
pub const SOURCE_NAME: &str = "Techversant Infotech";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub source_name: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// `.xlsx` is appended when missing.
    pub output_file: String,
    /// Percentage of records that must carry every essential field.
    pub completeness_threshold: f64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            source_name: SOURCE_NAME.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            output_file: DEFAULT_FILE_NAME.to_string(),
            completeness_threshold: 80.0,
        }
    }
}

impl ScrapeConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = file.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.completeness_threshold = threshold;
        self
    }

    /// Run metadata stamped at `at`.
    pub fn capture_at(&self, at: NaiveDateTime) -> CaptureInfo {
        CaptureInfo {
            source_name: self.source_name.clone(),
            source_url: self.base_url.clone(),
            captured_at: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
