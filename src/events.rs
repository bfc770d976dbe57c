//! Event System
//!
//! Timestamped activity events shown in the dashboard log panel.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Which part of the client produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Config,
    Shortener,
    TopUrls,
    Clipboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(source: Source, msg: String) -> Self {
        Self::new(source, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(source: Source, msg: String) -> Self {
        Self::new(source, msg, EventType::Error, LogLevel::Error)
    }

    pub fn waiting(source: Source, msg: String) -> Self {
        Self::new(source, msg, EventType::Waiting, LogLevel::Info)
    }

    pub fn refresh(source: Source, msg: String) -> Self {
        Self::new(source, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_events_always_display() {
        let event = Event::error(Source::Shortener, "boom".to_string());
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format_carries_message() {
        let event = Event::success(Source::TopUrls, "loaded page 1".to_string());
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success"));
        assert!(rendered.ends_with("loaded page 1"));
    }
}
