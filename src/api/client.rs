//! Shortener API Client
//!
//! A client for the URL-shortening backend, covering URL submission and
//! top-URLs retrieval.

use crate::api::ShortenerBackend;
use crate::api::error::ApiError;
use crate::config::Config;
use crate::consts::cli_consts::{connect_timeout, request_timeout};
use crate::types::{ShortenRequest, ShortenResponse, TopUrlsResponse};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("shortlink-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(connect_timeout())
                .timeout(request_timeout())
                .build()?,
            base_url: config.api_base(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl ShortenerBackend for ApiClient {
    async fn shorten(&self, long_url: &str) -> Result<ShortenResponse, ApiError> {
        let request = ShortenRequest {
            long_url: long_url.to_string(),
        };
        self.post_request("api/save_url", &request).await
    }

    async fn top_urls(&self, page: u32, limit: u32) -> Result<TopUrlsResponse, ApiError> {
        self.get_request(&format!("api/top_urls?page={}&limit={}", page, limit))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The configured domain must drive every request URL.
    fn test_build_url_targets_configured_domain() {
        let config = Config::new("example.com".to_string());
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.build_url("api/save_url"),
            "http://example.com/api/save_url"
        );
        assert_eq!(
            client.build_url("/api/top_urls?page=1&limit=10"),
            "http://example.com/api/top_urls?page=1&limit=10"
        );
    }

    #[test]
    fn test_decode_response_rejects_non_json() {
        let result: Result<ShortenResponse, ApiError> =
            ApiClient::decode_response(b"<html>not json</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
