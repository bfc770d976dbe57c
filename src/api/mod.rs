use crate::api::error::ApiError;
use crate::types::{ShortenResponse, TopUrlsResponse};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ShortenerBackend: Send + Sync {
    /// Submit a long URL for shortening and return the issued short URL.
    async fn shorten(&self, long_url: &str) -> Result<ShortenResponse, ApiError>;

    /// Fetch one page of the backend-ranked top URLs.
    async fn top_urls(&self, page: u32, limit: u32) -> Result<TopUrlsResponse, ApiError>;
}
