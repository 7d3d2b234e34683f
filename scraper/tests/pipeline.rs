// tests/pipeline.rs
use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx};
use careers_scraper::{process_page, Page, ScrapeConfig, ScrapeError};
use chrono::NaiveDate;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("careers_pipeline_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn config_in(dir: &Path, file: &str) -> ScrapeConfig {
    ScrapeConfig::default().with_output_file(dir.join(file).to_string_lossy().into_owned())
}

fn posting(title: &str, category: &str, location: &str) -> String {
    format!(
        r#"<section class="crr_app_stt">
             <h3 class="crr_app_hh">{title}</h3>
             <span class="crr_app_tp bluecrr">{category}</span>
             <span class="crr_app_plc">{location}</span>
             <p>Posted on 01 Mar 2024</p>
             <p><strong>Required Skills</strong></p>
             <ul><li>Rust</li><li>SQL</li></ul>
             <p>Minimum of 3 years working on production systems.</p>
             <a class="crr_app_nw" href="/apply/{title}" datatitle="{title}">Apply</a>
           </section>"#
    )
}

fn careers_page(postings: &[String]) -> String {
    format!(
        "<html><body><h1>Careers</h1><div class=\"jobs\">{}</div></body></html>",
        postings.join("\n")
    )
}

#[test]
fn test_page_with_postings_is_exported() {
    let dir = tmp_dir("export");
    let config = config_in(&dir, "jobs");
    let capture = config.capture_at(
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    );
    let html = careers_page(&[
        posting("Rust Engineer", "Engineering", "Kochi"),
        posting("QA Lead", "Quality", "Trivandrum"),
    ]);

    let path = process_page(&html, &config, &capture).unwrap();
    assert_eq!(path, dir.join("jobs.xlsx"));

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let jobs = workbook.worksheet_range("Jobs").unwrap();
    assert_eq!(jobs.height(), 3);
    assert_eq!(jobs.get_value((1, 0)), Some(&Data::String("Rust Engineer".to_string())));
    // ExperienceRequired
    assert_eq!(jobs.get_value((1, 3)), Some(&Data::String("Minimum of 3 years".to_string())));
    // SkillsRequired
    assert_eq!(jobs.get_value((2, 6)), Some(&Data::String("Rust; SQL".to_string())));
    // ScrapedDate and SourceURL
    assert_eq!(jobs.get_value((2, 12)), Some(&Data::String("2024-03-01 10:00:00".to_string())));
    assert_eq!(
        jobs.get_value((2, 13)),
        Some(&Data::String("https://techversantinfotech.com/talent/".to_string()))
    );

    let summary = workbook.worksheet_range("Summary").unwrap();
    assert_eq!(summary.get_value((1, 1)), Some(&Data::Float(2.0)));
}

#[test]
fn test_incomplete_data_is_still_exported() {
    let dir = tmp_dir("incomplete");
    let config = config_in(&dir, "partial.xlsx");
    let capture = config.capture_at(
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    );
    // no category or location anywhere: completeness is 0%
    let html = careers_page(&[posting("Designer", "", ""), posting("Writer", "", "")]);

    let path = process_page(&html, &config, &capture).unwrap();
    assert!(path.exists());
}

#[test]
fn test_page_without_sections_produces_no_file() {
    let dir = tmp_dir("empty");
    let config = config_in(&dir, "jobs");
    let capture = config.capture_at(
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    );
    let html = "<html><body><p>We are not hiring right now.</p></body></html>";

    let result = process_page(html, &config, &capture);
    assert!(matches!(result, Err(ScrapeError::NoData(_))));
    assert!(!dir.join("jobs.xlsx").exists());
}

#[test]
fn test_pagination_is_detected_but_only_first_page_parsed() {
    let html = format!(
        "{}<ul class=\"pagination\"><li><a href=\"?page=2\">2</a></li></ul>",
        posting("Rust Engineer", "Engineering", "Kochi")
    );
    let page = Page::parse(&html).unwrap();
    assert!(page.has_pagination());
    assert_eq!(page.sections().len(), 1);
}
