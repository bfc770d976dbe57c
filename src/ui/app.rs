//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::ShortenerBackend;
use crate::clipboard;
use crate::config::Config;
use crate::error::ClientError;
use crate::events::{Event as ActivityEvent, Source};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::messages::WorkerMessage;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Application state
pub struct App {
    /// Dashboard state rendered every frame.
    state: DashboardState,
    /// Backend the request tasks talk to.
    backend: Arc<dyn ShortenerBackend>,
    /// Sender cloned into each spawned request task.
    message_sender: mpsc::Sender<WorkerMessage>,
    /// Receives results from request tasks.
    message_receiver: mpsc::Receiver<WorkerMessage>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(config: &Config, backend: Arc<dyn ShortenerBackend>) -> Self {
        let (message_sender, message_receiver) =
            mpsc::channel(crate::consts::cli_consts::MESSAGE_QUEUE_SIZE);
        let mut state = DashboardState::new(config.server_domain.clone());
        state.add_to_activity_log(ActivityEvent::success(
            Source::Config,
            format!("Using server domain {}", config.server_domain),
        ));
        Self {
            state,
            backend,
            message_sender,
            message_receiver,
        }
    }

    /// Submits the current input for shortening. Repeat submissions are not
    /// deduplicated; responses apply in arrival order.
    pub fn request_shorten(&mut self) {
        let long_url = self.state.input.trim().to_string();
        if long_url.is_empty() {
            return;
        }
        self.state.shorten_in_flight = true;
        self.state.add_to_activity_log(ActivityEvent::waiting(
            Source::Shortener,
            format!("Shortening {}", long_url),
        ));
        spawn_shorten(self.backend.clone(), self.message_sender.clone(), long_url);
    }

    /// Requests one page of the top-URLs table.
    pub fn request_top_urls(&mut self, page: u32) {
        self.state.loading_top_urls = true;
        spawn_top_urls(
            self.backend.clone(),
            self.message_sender.clone(),
            page,
            self.state.page_limit,
        );
    }

    /// Copies the currently displayed short URL, exactly as displayed.
    fn copy_short_url(&mut self) {
        let Some(short_url) = self.state.short_url.clone() else {
            return;
        };
        let event = match clipboard::copy_text(&short_url) {
            Ok(()) => ActivityEvent::success(Source::Clipboard, format!("Copied {}", short_url)),
            Err(err) => ActivityEvent::error(Source::Clipboard, err.to_string()),
        };
        self.state.add_to_activity_log(event);
    }
}

/// Spawns a save-URL request task reporting back over the channel.
pub(crate) fn spawn_shorten(
    backend: Arc<dyn ShortenerBackend>,
    sender: mpsc::Sender<WorkerMessage>,
    long_url: String,
) {
    tokio::spawn(async move {
        let result = backend
            .shorten(&long_url)
            .await
            .map_err(ClientError::from);
        let _ = sender.send(WorkerMessage::Shortened(result)).await;
    });
}

/// Spawns a top-URLs fetch task reporting back over the channel.
pub(crate) fn spawn_top_urls(
    backend: Arc<dyn ShortenerBackend>,
    sender: mpsc::Sender<WorkerMessage>,
    page: u32,
    limit: u32,
) {
    tokio::spawn(async move {
        let result = backend
            .top_urls(page, limit)
            .await
            .map_err(ClientError::from);
        let _ = sender
            .send(WorkerMessage::TopUrlsLoaded { page, result })
            .await;
    });
}

/// Runs the application UI in a loop, handling events and rendering the
/// dashboard. The first top-URLs page is requested before the first frame,
/// after configuration has already been loaded.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.request_top_urls(app.state.current_page);

    loop {
        // Apply all pending worker results in arrival order
        while let Ok(message) = app.message_receiver.try_recv() {
            app.state.handle_message(message);
        }

        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if ctrl => return Ok(()),
                    KeyCode::Enter => app.request_shorten(),
                    KeyCode::Backspace => {
                        app.state.input.pop();
                    }
                    KeyCode::Char('y') if ctrl => app.copy_short_url(),
                    KeyCode::Char('r') if ctrl => {
                        let page = app.state.current_page;
                        app.request_top_urls(page);
                    }
                    KeyCode::Char('n') if ctrl => {
                        if let Some(page) = app.state.next_page() {
                            app.request_top_urls(page);
                        }
                    }
                    KeyCode::Char('p') if ctrl => {
                        if let Some(page) = app.state.previous_page() {
                            app.request_top_urls(page);
                        }
                    }
                    KeyCode::Char(c) if !ctrl => app.state.input.push(c),
                    _ => {}
                }
            }
        }
    }
}
