//! Techversant Job Scraper
//!
//! Scrapes the job postings on the Techversant talent page
//! and saves them to Techversant_Jobs.xlsx

use anyhow::{bail, Result};
use careers_scraper::ScrapeConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match careers_scraper::run(&ScrapeConfig::default()) {
        Some(path) => {
            println!("\n🎉 Job scraping completed! Check '{}' for results.", path.display());
            Ok(())
        }
        None => bail!("💥 Job scraping failed. Please check the errors above."),
    }
}
