//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

use crate::config::Config;

/// Creates the HTTP client used for a run.
///
/// Every request made through it fails with a timeout error once
/// `timeout_seconds` elapse, so a stalled site cannot hang the scraper.
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .connect_timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(user_agent)
        .build()
}

/// Creates the HTTP client from the loaded configuration.
pub fn create_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    create_http_client_with_timeout(config.http_timeout_seconds, &config.user_agent)
}

/// Creates an HTTP client for testing with default settings
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(
        crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        crate::constants::DEFAULT_USER_AGENT,
    )
    .expect("Failed to create test HTTP client")
}
