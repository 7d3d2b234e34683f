use careers_common::JobRecord;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationReport {
    pub complete: usize,
    pub total: usize,
    pub healthy: bool,
}

impl ValidationReport {
    /// Percentage of records with every essential field; 0 when there are none.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.complete as f64 * 100.0 / self.total as f64
    }
}

/// Title, category and location are the essential fields.
fn is_complete(job: &JobRecord) -> bool {
    [&job.job_title, &job.job_category, &job.location]
        .iter()
        .all(|value| !value.is_empty())
}

/// Advisory completeness check. A low rate is logged, never fatal.
pub fn validate_jobs(jobs: &[JobRecord], threshold: f64) -> ValidationReport {
    if jobs.is_empty() {
        warn!("⚠️  No jobs found - this might indicate a problem");
        return ValidationReport {
            complete: 0,
            total: 0,
            healthy: false,
        };
    }

    let complete = jobs.iter().filter(|job| is_complete(job)).count();
    let mut report = ValidationReport {
        complete,
        total: jobs.len(),
        healthy: true,
    };

    info!(
        "📊 Data completeness: {}/{} jobs ({:.1}%) have all essential fields",
        report.complete,
        report.total,
        report.completion_rate()
    );

    if report.completion_rate() < threshold {
        warn!("⚠️  Low completion rate - website structure may have changed");
        report.healthy = false;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, category: &str, location: &str) -> JobRecord {
        JobRecord {
            job_title: title.to_string(),
            job_category: category.to_string(),
            location: location.to_string(),
            ..JobRecord::default()
        }
    }

    #[test]
    fn test_all_complete_is_healthy() {
        let jobs = vec![job("A", "Eng", "Kochi"), job("B", "QA", "Trivandrum")];
        let report = validate_jobs(&jobs, 80.0);
        assert_eq!(report.complete, 2);
        assert!(report.healthy);
        assert_eq!(report.completion_rate(), 100.0);
    }

    #[test]
    fn test_exactly_at_threshold_is_healthy() {
        let mut jobs = vec![job("A", "Eng", "Kochi"); 4];
        jobs.push(job("E", "", "Kochi"));
        let report = validate_jobs(&jobs, 80.0);
        assert_eq!(report.completion_rate(), 80.0);
        assert!(report.healthy);
    }

    #[test]
    fn test_below_threshold_is_unhealthy() {
        let jobs = vec![
            job("A", "Eng", "Kochi"),
            job("B", "", "Kochi"),
            job("C", "QA", ""),
        ];
        let report = validate_jobs(&jobs, 80.0);
        assert_eq!(report.complete, 1);
        assert_eq!(report.total, 3);
        assert!(!report.healthy);
    }

    #[test]
    fn test_empty_collection_is_unhealthy() {
        let report = validate_jobs(&[], 80.0);
        assert!(!report.healthy);
        assert_eq!(report.completion_rate(), 0.0);
    }
}
