pub mod cli_consts {
    //! Client configuration constants, organized by functional area.

    use std::time::Duration;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the worker-to-UI message channel.
    pub const MESSAGE_QUEUE_SIZE: usize = 100;

    /// Page requested when no explicit page is given.
    pub const DEFAULT_PAGE: u32 = 1;

    /// Rows per page requested when no explicit limit is given.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Connect timeout for backend requests.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Total request timeout for backend requests.
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    pub const fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }

    pub const fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
