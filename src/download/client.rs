//! Thin HTTP client shared by listing resolution and image downloads.
//!
//! The client is created once and reused for every request in a run,
//! taking advantage of connection pooling. Non-success statuses are not
//! errors at this layer: callers receive the status alongside the body and
//! apply their own policy (a listing aborts its branch, an image fetch is
//! reported and skipped).

use reqwest::{Client, StatusCode};
use tracing::debug;

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::error::DownloadError;
use crate::user_agent;

/// HTTP client for listing and image requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(connect_timeout_secs))
            .timeout(std::time::Duration::from_secs(read_timeout_secs))
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches a listing page, returning status and body text.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::Network` on transport-level failures only;
    /// non-success statuses are returned to the caller.
    pub async fn get_text(&self, url: &str) -> Result<(StatusCode, String), DownloadError> {
        debug!(url = %url, "GET (text)");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| DownloadError::network(url, source))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| DownloadError::network(url, source))?;
        Ok((status, body))
    }

    /// Fetches an image resource, returning status and body bytes.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::Network` on transport-level failures only;
    /// non-success statuses are returned to the caller.
    pub async fn get_bytes(&self, url: &str) -> Result<(StatusCode, Vec<u8>), DownloadError> {
        debug!(url = %url, "GET (bytes)");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| DownloadError::network(url, source))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| DownloadError::network(url, source))?;
        Ok((status, body.to_vec()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_text_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/listing"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let (status, body) = client
            .get_text(&format!("{}/listing", server.uri()))
            .await
            .unwrap();
        assert_eq!(status.as_u16(), 200);
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_get_text_non_success_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let (status, body) = client
            .get_text(&format!("{}/missing", server.uri()))
            .await
            .unwrap();
        assert_eq!(status.as_u16(), 404);
        assert_eq!(body, "not here");
    }

    #[tokio::test]
    async fn test_get_bytes_returns_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/image"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let (status, body) = client
            .get_bytes(&format!("{}/image", server.uri()))
            .await
            .unwrap();
        assert_eq!(status.as_u16(), 200);
        assert_eq!(body, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 1 on localhost is refused, which is a transport failure.
        let client = HttpClient::new_with_timeouts(1, 1);
        let error = client.get_text("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(error, DownloadError::Network { .. }));
    }
}
