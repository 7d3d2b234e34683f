//! Shared types for the careers page scraper and the workbook exporter.

use serde::{Deserialize, Serialize};

/// `strftime` layout used for every capture timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spreadsheet column order. Names match the serialized field names of [`JobRecord`].
pub const COLUMNS: [&str; 14] = [
    "JobTitle",
    "JobCategory",
    "Location",
    "ExperienceRequired",
    "PostingDate",
    "JobDescriptionSummary",
    "SkillsRequired",
    "ContactEmail",
    "CompanyBenefits",
    "Salary",
    "JobURL",
    "JobID",
    "ScrapedDate",
    "SourceURL",
];

/// One job posting. Missing values are empty strings, never placeholders.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct JobRecord {
    pub job_title: String,
    pub job_category: String,
    pub location: String,
    pub experience_required: String,
    pub posting_date: String,
    pub job_description_summary: String,
    pub skills_required: String,
    pub contact_email: String,
    pub company_benefits: String,
    pub salary: String,
    #[serde(rename = "JobURL")]
    pub job_url: String,
    #[serde(rename = "JobID")]
    pub job_id: String,
    pub scraped_date: String,
    #[serde(rename = "SourceURL")]
    pub source_url: String,
}

impl JobRecord {
    /// Empty record stamped with the run's capture metadata.
    pub fn stamped(capture: &CaptureInfo) -> Self {
        Self {
            scraped_date: capture.captured_at.clone(),
            source_url: capture.source_url.clone(),
            ..Self::default()
        }
    }
}

/// Per-run metadata shared by every record and the summary sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureInfo {
    pub source_name: String,
    pub source_url: String,
    /// Already formatted with [`TIMESTAMP_FORMAT`].
    pub captured_at: String,
}
