//! Dashboard state management

use crate::consts::cli_consts::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_ACTIVITY_LOGS};
use crate::events::{Event, Source};
use crate::types::{Pagination, TopUrlEntry};
use crate::ui::messages::WorkerMessage;

use std::collections::VecDeque;

/// All state the dashboard renders from. Mutated only by the UI loop.
#[derive(Debug)]
pub struct DashboardState {
    /// Backend network address the client talks to.
    pub server_domain: String,
    /// Long-URL input field contents.
    pub input: String,
    /// Currently displayed short URL; `None` keeps the display hidden.
    pub short_url: Option<String>,
    /// Whether a save-URL request is in flight.
    pub shorten_in_flight: bool,
    /// Rows of the top-URLs table, replaced wholesale on every refresh.
    pub top_urls: Vec<TopUrlEntry>,
    /// Paging metadata of the page currently shown.
    pub pagination: Pagination,
    /// Page currently shown.
    pub current_page: u32,
    /// Rows per page requested from the backend.
    pub page_limit: u32,
    /// Whether a top-URLs fetch is in flight.
    pub loading_top_urls: bool,
    /// Activity logs for display.
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter.
    pub tick: usize,
}

impl DashboardState {
    pub fn new(server_domain: String) -> Self {
        Self {
            server_domain,
            input: String::new(),
            short_url: None,
            shorten_in_flight: false,
            top_urls: Vec::new(),
            pagination: Pagination::default(),
            current_page: DEFAULT_PAGE,
            page_limit: DEFAULT_LIMIT,
            loading_top_urls: false,
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    /// Full short URL for a table entry, built from the configured domain
    /// and the backend-issued token.
    pub fn full_short_url(&self, entry: &TopUrlEntry) -> String {
        format!("http://{}/{}", self.server_domain, entry.short_url)
    }

    /// Page to request on "next", if the backend reported one.
    pub fn next_page(&self) -> Option<u32> {
        self.pagination.next.filter(|&p| p != self.current_page)
    }

    /// Page to request on "previous", if the backend reported one.
    pub fn previous_page(&self) -> Option<u32> {
        self.pagination.previous.filter(|&p| p != self.current_page)
    }

    /// Applies a worker result. Responses land here in arrival order, so a
    /// late shorten response overwrites an earlier one.
    pub fn handle_message(&mut self, message: WorkerMessage) {
        match message {
            WorkerMessage::Shortened(Ok(resp)) => {
                self.shorten_in_flight = false;
                self.add_to_activity_log(Event::success(
                    Source::Shortener,
                    format!("Shortened to {}", resp.short_url),
                ));
                self.short_url = Some(resp.short_url);
            }
            WorkerMessage::Shortened(Err(err)) => {
                self.shorten_in_flight = false;
                self.add_to_activity_log(Event::error(Source::Shortener, err.to_string()));
            }
            WorkerMessage::TopUrlsLoaded {
                page,
                result: Ok(resp),
            } => {
                self.loading_top_urls = false;
                // Replace, never append: repeated refreshes must not
                // duplicate rows.
                self.top_urls = resp.top_url_data;
                self.pagination = resp.pagination;
                self.current_page = page;
                self.add_to_activity_log(Event::refresh(
                    Source::TopUrls,
                    format!("Loaded page {} ({} rows)", page, self.top_urls.len()),
                ));
            }
            WorkerMessage::TopUrlsLoaded {
                page,
                result: Err(err),
            } => {
                self.loading_top_urls = false;
                self.add_to_activity_log(Event::error(
                    Source::TopUrls,
                    format!("Page {} failed: {}", page, err),
                ));
            }
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::types::{ShortenResponse, TopUrlsResponse};

    fn sample_page(entries: Vec<TopUrlEntry>, next: Option<u32>) -> TopUrlsResponse {
        TopUrlsResponse {
            top_url_data: entries,
            pagination: Pagination {
                next,
                ..Pagination::default()
            },
        }
    }

    fn sample_entry() -> TopUrlEntry {
        TopUrlEntry {
            long_url: "http://a.com".to_string(),
            short_url: "x1".to_string(),
            follow_count: 3,
            create_count: 1,
        }
    }

    #[test]
    // A successful save-URL response makes the display visible with the
    // backend-issued text, verbatim.
    fn test_shortened_response_shows_short_url() {
        let mut state = DashboardState::new("example.com".to_string());
        assert!(state.short_url.is_none());

        state.handle_message(WorkerMessage::Shortened(Ok(ShortenResponse {
            long_url: "http://a.com".to_string(),
            short_url: "abc123".to_string(),
        })));

        assert_eq!(state.short_url.as_deref(), Some("abc123"));
        assert!(!state.shorten_in_flight);
    }

    #[test]
    // Responses apply in arrival order: the last one to land wins.
    fn test_late_shorten_response_overwrites_earlier() {
        let mut state = DashboardState::new("example.com".to_string());
        for token in ["first", "second"] {
            state.handle_message(WorkerMessage::Shortened(Ok(ShortenResponse {
                long_url: String::new(),
                short_url: token.to_string(),
            })));
        }
        assert_eq!(state.short_url.as_deref(), Some("second"));
    }

    #[test]
    fn test_top_urls_page_renders_one_row_per_entry() {
        let mut state = DashboardState::new("example.com".to_string());
        state.handle_message(WorkerMessage::TopUrlsLoaded {
            page: 1,
            result: Ok(sample_page(vec![sample_entry()], Some(2))),
        });

        assert_eq!(state.top_urls.len(), 1);
        assert_eq!(state.top_urls[0].long_url, "http://a.com");
        assert_eq!(state.full_short_url(&state.top_urls[0]), "http://example.com/x1");
        assert_eq!(state.top_urls[0].follow_count, 3);
        assert_eq!(state.top_urls[0].create_count, 1);
        assert_eq!(state.next_page(), Some(2));
    }

    #[test]
    // Loading the same page twice must not duplicate rows.
    fn test_repeated_load_replaces_rows() {
        let mut state = DashboardState::new("example.com".to_string());
        for _ in 0..2 {
            state.handle_message(WorkerMessage::TopUrlsLoaded {
                page: 1,
                result: Ok(sample_page(vec![sample_entry()], None)),
            });
        }
        assert_eq!(state.top_urls.len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_rows_and_logs_error() {
        let mut state = DashboardState::new("example.com".to_string());
        state.handle_message(WorkerMessage::TopUrlsLoaded {
            page: 1,
            result: Ok(sample_page(vec![sample_entry()], None)),
        });
        state.handle_message(WorkerMessage::TopUrlsLoaded {
            page: 2,
            result: Err(ClientError::BackendError {
                status: 500,
                message: "Internal server error".to_string(),
            }),
        });

        assert_eq!(state.top_urls.len(), 1);
        assert_eq!(state.current_page, 1);
        let last = state.activity_logs.back().unwrap();
        assert!(last.msg.contains("status 500"));
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = DashboardState::new("example.com".to_string());
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::success(Source::TopUrls, format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
