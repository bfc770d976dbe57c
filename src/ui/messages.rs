//! Messages sent from spawned request tasks back to the UI loop.

use crate::error::ClientError;
use crate::types::{ShortenResponse, TopUrlsResponse};

#[derive(Debug)]
pub enum WorkerMessage {
    /// Result of a save-URL request.
    Shortened(Result<ShortenResponse, ClientError>),
    /// Result of a top-URLs page fetch.
    TopUrlsLoaded {
        page: u32,
        result: Result<TopUrlsResponse, ClientError>,
    },
}
