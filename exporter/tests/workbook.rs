// tests/workbook.rs
use std::fs;
use std::path::PathBuf;

use calamine::{open_workbook, Data, Reader, Xlsx};
use careers_common::{CaptureInfo, JobRecord, COLUMNS};
use careers_exporter::{save_jobs, ExportError, JOBS_SHEET, SUMMARY_SHEET};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("careers_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn capture() -> CaptureInfo {
    CaptureInfo {
        source_name: "Techversant Infotech".to_string(),
        source_url: "https://techversantinfotech.com/talent/".to_string(),
        captured_at: "2024-03-01 10:00:00".to_string(),
    }
}

fn job(title: &str, category: &str, location: &str) -> JobRecord {
    JobRecord {
        job_title: title.to_string(),
        job_category: category.to_string(),
        location: location.to_string(),
        skills_required: "Rust; SQL".to_string(),
        ..JobRecord::stamped(&capture())
    }
}

#[test]
fn test_exported_sheets_have_header_plus_one_row_per_job() {
    let dir = tmp_dir("rows");
    let name = dir.join("jobs");
    let jobs = vec![
        job("Rust Engineer", "Engineering", "Kochi"),
        job("QA Lead", "Quality", "Trivandrum"),
        job("Backend Engineer", "Engineering", "Kochi"),
    ];

    let path = save_jobs(&jobs, &capture(), name.to_str()).unwrap();
    assert!(path.to_string_lossy().ends_with("jobs.xlsx"));
    assert!(path.exists());

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names(), vec![JOBS_SHEET.to_string(), SUMMARY_SHEET.to_string()]);

    let jobs_range = workbook.worksheet_range(JOBS_SHEET).unwrap();
    assert_eq!(jobs_range.height(), jobs.len() + 1);
    assert_eq!(jobs_range.width(), COLUMNS.len());
    assert_eq!(jobs_range.get_value((0, 0)), Some(&Data::String("JobTitle".to_string())));
    assert_eq!(jobs_range.get_value((2, 0)), Some(&Data::String("QA Lead".to_string())));

    let summary = workbook.worksheet_range(SUMMARY_SHEET).unwrap();
    assert_eq!(summary.get_value((1, 0)), Some(&Data::String("Total Jobs".to_string())));
    assert_eq!(summary.get_value((1, 1)), Some(&Data::Float(3.0)));
    assert_eq!(summary.get_value((7, 0)), Some(&Data::String("  Engineering".to_string())));
    assert_eq!(summary.get_value((7, 1)), Some(&Data::Float(2.0)));
}

#[test]
fn test_blank_fields_are_not_written_as_text() {
    let dir = tmp_dir("blank");
    let name = dir.join("blank.xlsx");
    let jobs = vec![job("Rust Engineer", "", "Kochi")];

    let path = save_jobs(&jobs, &capture(), name.to_str()).unwrap();
    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range(JOBS_SHEET).unwrap();

    let category = range.get_value((1, 1));
    assert!(matches!(category, None | Some(Data::Empty)), "got {:?}", category);
}

#[test]
fn test_empty_input_writes_nothing() {
    let dir = tmp_dir("empty");
    let name = dir.join("none");

    let result = save_jobs(&[], &capture(), name.to_str());
    assert!(matches!(result, Err(ExportError::NoData)));
    assert!(!dir.join("none.xlsx").exists());
    assert!(!dir.join("none.xlsx.part").exists());
}

#[test]
fn test_oversized_field_still_saves() {
    let dir = tmp_dir("oversized");
    let name = dir.join("long");
    let mut long = job("Technical Writer", "Content", "Kochi");
    long.job_description_summary = "x".repeat(40_000);

    let path = save_jobs(&[long], &capture(), name.to_str()).unwrap();
    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range(JOBS_SHEET).unwrap();

    match range.get_value((1, 5)) {
        Some(Data::String(text)) => assert_eq!(text.len(), 32_767),
        other => panic!("expected truncated text, got {:?}", other),
    }
}
