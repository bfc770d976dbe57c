mod api;
mod clipboard;
mod config;
mod consts;
mod error;
mod events;
mod logging;
mod pretty;
mod types;
mod ui;

use crate::api::{ApiClient, ShortenerBackend};
use crate::config::Config;
use crate::consts::cli_consts::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::error::ClientError;
use crate::pretty::{print_cmd_error, print_cmd_info};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::sync::Arc;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Path to the plain-text file holding the backend domain (host:port).
    /// The SHORTLINK_DOMAIN environment variable takes precedence when set.
    #[arg(long, value_name = "PATH", default_value = "domain.txt")]
    domain_file: PathBuf,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start,
    /// Shorten a single URL and print the issued short URL
    Shorten {
        /// The long URL to shorten. Passed to the backend as-is.
        #[arg(value_name = "LONG_URL")]
        long_url: String,

        /// Also copy the short URL to the system clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Print one page of the top-URLs table
    TopUrls {
        /// Page to fetch.
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        /// Maximum number of rows per page.
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Explicit ordering contract: resolve configuration first, then build
    // the client from it. Every later request reads the same Config.
    let config = Config::resolve(&args.domain_file)?;
    let client = ApiClient::new(&config).map_err(ClientError::from)?;

    match args.command {
        Command::Start => start(config, client).await,
        Command::Shorten { long_url, copy } => {
            let response = match client.shorten(&long_url).await {
                Ok(response) => response,
                Err(e) => {
                    let e = ClientError::from(e);
                    print_cmd_error!("Failed to shorten URL", "{}", e);
                    return Err(e.into());
                }
            };
            println!("{}", response.short_url);
            if copy {
                clipboard::copy_text(&response.short_url)?;
                print_cmd_info!("Clipboard", "Short URL copied to clipboard.");
            }
            Ok(())
        }
        Command::TopUrls { page, limit } => {
            let response = match client.top_urls(page, limit).await {
                Ok(response) => response,
                Err(e) => {
                    let e = ClientError::from(e);
                    print_cmd_error!("Failed to load top URLs", "{}", e);
                    return Err(e.into());
                }
            };
            println!(
                "{:<48} {:<32} {:>8} {:>8}",
                "LONG URL", "SHORT URL", "FOLLOWS", "CREATES"
            );
            for entry in &response.top_url_data {
                println!(
                    "{:<48} {:<32} {:>8} {:>8}",
                    entry.long_url,
                    config.short_url(&entry.short_url),
                    entry.follow_count,
                    entry.create_count
                );
            }
            if let Some(next) = response.pagination.next {
                print_cmd_info!("Paging", "More available: --page {}", next);
            }
            Ok(())
        }
    }
}

/// Starts the interactive dashboard.
///
/// # Arguments
/// * `config` - Resolved configuration holding the backend domain.
/// * `client` - API client built from the same configuration.
async fn start(config: Config, client: ApiClient) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(&config, Arc::new(client));
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
