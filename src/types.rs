//! Wire types shared with the backend.
//!
//! These mirror the gateway's JSON contract. Entries are read-only
//! projections; the client never mutates them.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/save_url`.
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Response of `POST /api/save_url`. `short_url` is the full short URL as
/// issued by the backend and is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    #[serde(default)]
    pub long_url: String,
    pub short_url: String,
}

/// One row of the top-URLs table. `short_url` here is the bare
/// backend-issued token, not a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopUrlEntry {
    pub long_url: String,
    pub short_url: String,
    pub follow_count: i64,
    pub create_count: i64,
}

/// Paging metadata attached to a top-URLs page. The backend omits fields
/// that do not apply (e.g. `next` on the last page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next: Option<u32>,
    #[serde(default)]
    pub previous: Option<u32>,
    #[serde(default)]
    pub record_per_page: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_page: Option<u32>,
}

/// Response of `GET /api/top_urls`.
#[derive(Debug, Clone, Deserialize)]
pub struct TopUrlsResponse {
    pub top_url_data: Vec<TopUrlEntry>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_response_deserializes() {
        let json = r#"{"long_url":"http://a.com","short_url":"http://example.com/abc123"}"#;
        let resp: ShortenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.short_url, "http://example.com/abc123");
        assert_eq!(resp.long_url, "http://a.com");
    }

    #[test]
    fn test_top_urls_response_deserializes() {
        let json = r#"{
            "top_url_data": [
                {"long_url":"http://a.com","short_url":"x1","follow_count":3,"create_count":1}
            ],
            "pagination": {"next":2,"record_per_page":10,"current_page":1,"total_page":5}
        }"#;
        let resp: TopUrlsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.top_url_data.len(), 1);
        let entry = &resp.top_url_data[0];
        assert_eq!(entry.long_url, "http://a.com");
        assert_eq!(entry.short_url, "x1");
        assert_eq!(entry.follow_count, 3);
        assert_eq!(entry.create_count, 1);
        assert_eq!(resp.pagination.next, Some(2));
        assert_eq!(resp.pagination.previous, None);
    }

    #[test]
    // The backend may omit pagination entirely.
    fn test_top_urls_response_without_pagination() {
        let json = r#"{"top_url_data": []}"#;
        let resp: TopUrlsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.top_url_data.is_empty());
        assert_eq!(resp.pagination, Pagination::default());
    }

    #[test]
    fn test_shorten_request_serializes() {
        let req = ShortenRequest {
            long_url: "http://a.com/very/long".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"long_url":"http://a.com/very/long"}"#);
    }
}
