//! tasklane - a two-column task board for the terminal.
//!
//! This is the main binary: it parses arguments, sets up logging, loads the
//! configuration and runs the TUI.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tasklane_config::{Config, SourceConfig, persistence::default_log_path};
use tasklane_tui::{App, build_source, terminal};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tasklane", version)]
#[command(about = "A two-column task board with drag-and-drop reordering")]
struct Args {
    /// Config file to use instead of the default search locations.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load tasks from this JSON file instead of the configured source.
    #[arg(short, long)]
    tasks: Option<PathBuf>,

    /// Write logs here instead of the default log file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(args.log_file);

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(path) = args.tasks {
        config.source = SourceConfig {
            timeout_secs: config.source.timeout_secs,
            ..SourceConfig::file(path)
        };
        config.validate()?;
    }

    let source = build_source(&config.source)?;
    info!(source = ?config.source.kind, policy = ?config.board.drop_policy, "starting");

    // Install before touching the terminal so a panic restores it
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(source, &config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends logs to a file, since the terminal belongs to the TUI.
///
/// Logging stays off if no log file can be opened.
fn setup_tracing(log_file: Option<PathBuf>) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let Some(path) = log_file.or_else(|| default_log_path().ok()) else {
        return;
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("tasklane: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_env("TASKLANE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("tasklane=info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %path.display(), "logging initialized");
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
