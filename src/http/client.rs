use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::settings::FetcherSettings;

/// HTTP client with a fixed delay between requests, to stay polite
/// towards the raw-content host when pulling hundreds of event files.
pub struct RateLimitedClient {
    client: Client,
    delay: Duration,
    requests_sent: usize,
}

impl RateLimitedClient {
    pub fn new(settings: &FetcherSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            delay: Duration::from_millis(settings.rate_limit_ms),
            requests_sent: 0,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        if self.requests_sent > 0 {
            sleep(self.delay).await;
        }
        self.requests_sent += 1;
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
