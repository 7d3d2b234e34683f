use reqwest::blocking::Client;
use tracing::info;

use crate::config::ScrapeConfig;
use crate::ScrapeError;

/// Blocking HTTP client carrying the configured user agent and timeout.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// GETs `url`. Non-2xx statuses and timeouts are transport errors.
    pub fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        info!("📡 Fetching jobs from: {}", url);
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        info!("✅ Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let config = ScrapeConfig::default().with_timeout(std::time::Duration::from_secs(2));
        let fetcher = Fetcher::new(&config).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:9/talent/");
        assert!(matches!(result, Err(ScrapeError::Transport(_))));
    }
}
