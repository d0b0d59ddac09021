//! Page fetching with status mapping and error classification

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a page and returns its body as text.
///
/// No retries and no caching: the first failure is returned. Non-2xx
/// statuses become specific [`AppError`] variants, timeouts and connect
/// failures are classified, and an empty 2xx body is an error rather than
/// an empty page.
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    if body.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}
