//! Multiverse HTTP client implementation

use std::time::Duration;

use multiverse_core::error::{BAD_ARRAY, BAD_PARAM, NO_LOCATION, NO_PAGE};
use multiverse_core::models::{Location, Page};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{MultiverseClientError, Result};
use crate::types::*;

/// Percent-encode the brackets of an id selector so it survives as a
/// single path segment.
fn encode_selector(selector: &str) -> String {
    selector.replace('[', "%5B").replace(']', "%5D")
}

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Location REST API client
#[derive(Debug, Clone)]
pub struct MultiverseClient {
    client: Client,
    base_url: Url,
}

impl MultiverseClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the server (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // Health Check
    // =========================================================================

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Fetch the resource index
    #[instrument(skip(self))]
    pub async fn api_root(&self) -> Result<ApiRoot> {
        let url = self.base_url.join("/api")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Location Operations
    // =========================================================================

    /// List one page of locations matching `query`
    #[instrument(skip(self))]
    pub async fn list_locations(&self, query: &LocationQuery) -> Result<Page<Location>> {
        let url = self.base_url.join("/api/location")?;
        debug!("Listing locations from {}", url);

        let response = self.client.get(url).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Follow a `next`/`prev` link from a page
    #[instrument(skip(self))]
    pub async fn follow(&self, link: &str) -> Result<Page<Location>> {
        let url = Url::parse(link)?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Get a single location by id
    #[instrument(skip(self))]
    pub async fn get_location(&self, id: u32) -> Result<Location> {
        let url = self.base_url.join(&format!("/api/location/{}", id))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Get several locations at once, in requested order
    ///
    /// Always sent in bracketed form so that a one-id slice still yields an
    /// array.
    #[instrument(skip(self))]
    pub async fn get_locations(&self, ids: &[u32]) -> Result<Vec<Location>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let list = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = self.base_url.join(&format!(
            "/api/location/{}",
            encode_selector(&format!("[{}]", list))
        ))?;

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Get `/api/location/{selector}` with the selector sent verbatim.
    ///
    /// The response is a single object or an array depending on the
    /// selector, so it is returned as untyped JSON.
    #[instrument(skip(self))]
    pub async fn get_raw(&self, selector: &str) -> Result<serde_json::Value> {
        let url = self
            .base_url
            .join(&format!("/api/location/{}", encode_selector(selector)))?;

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Handle response and deserialize JSON
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| MultiverseClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error_from_status(response, status).await)
        }
    }

    /// Extract error from failed response
    async fn extract_error(&self, response: reqwest::Response) -> MultiverseClientError {
        let status = response.status();
        self.extract_error_from_status(response, status).await
    }

    async fn extract_error_from_status(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> MultiverseClientError {
        // Try to parse error response body
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.error,
            Err(_) => format!("HTTP {}", status),
        };

        classify(status, message)
    }
}

/// Map a failed response onto an error variant by status and
/// classification message
fn classify(status: StatusCode, message: String) -> MultiverseClientError {
    match status {
        StatusCode::NOT_FOUND if message.contains(NO_LOCATION) => {
            MultiverseClientError::LocationNotFound(message)
        }
        StatusCode::NOT_FOUND if message.contains(NO_PAGE) => {
            MultiverseClientError::PageNotFound(message)
        }
        StatusCode::INTERNAL_SERVER_ERROR if message.contains(BAD_PARAM) => {
            MultiverseClientError::BadParam(message)
        }
        StatusCode::INTERNAL_SERVER_ERROR if message.contains(BAD_ARRAY) => {
            MultiverseClientError::BadArray(message)
        }
        _ => MultiverseClientError::server_error(status.as_u16(), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MultiverseClient::new("http://localhost:8080");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = MultiverseClient::new("not a url");
        assert!(client.is_err());
    }

    #[test]
    fn test_selector_brackets_are_encoded() {
        assert_eq!(encode_selector("[1,2]"), "%5B1,2%5D");
        assert_eq!(encode_selector("1,2,3"), "1,2,3");
    }

    #[test]
    fn test_classify_by_status_and_message() {
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, NO_LOCATION.to_string()),
            MultiverseClientError::LocationNotFound(_)
        ));
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, NO_PAGE.to_string()),
            MultiverseClientError::PageNotFound(_)
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, BAD_PARAM.to_string()),
            MultiverseClientError::BadParam(_)
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, BAD_ARRAY.to_string()),
            MultiverseClientError::BadArray(_)
        ));
        assert!(matches!(
            classify(StatusCode::BAD_GATEWAY, "HTTP 502".to_string()),
            MultiverseClientError::ServerError { status: 502, .. }
        ));
    }
}
