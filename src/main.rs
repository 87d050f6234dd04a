use clap::Parser;
use shorty::core::config::{self, CliOverrides};
use shorty::{ClipboardBackend, Page};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "shorty", about = "URL shortener playground for the terminal")]
struct Args {
    /// Clipboard backend used by the Copy buttons
    #[arg(short, long, value_enum)]
    clipboard: Option<ClipboardBackend>,

    /// Page shown on startup
    #[arg(short, long, value_enum)]
    page: Option<Page>,

    /// How long the "Copied!" indicator stays up, in milliseconds
    #[arg(long)]
    feedback_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::ShortyConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            clipboard: args.clipboard,
            page: args.page,
            feedback_ms: args.feedback_ms,
        },
    );

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "shorty starting up (clipboard={:?}, page={:?}, feedback={}ms)",
        resolved.clipboard_backend,
        resolved.start_page,
        resolved.feedback_delay.as_millis()
    );

    // Config problems found before the logger existed
    if let Some(e) = load_error {
        log::warn!("Ignoring config file: {e}");
    }
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }
    match config::config_path() {
        Some(path) => {
            if let Err(e) = config::ensure_default_config(&path) {
                log::warn!("Failed to write default config: {e}");
            }
        }
        None => log::warn!("Could not determine home directory, using default config"),
    }

    shorty::tui::run(resolved)
}
