//! gitty - a terminal Git client
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gitty::app::App;
use gitty::config;
use gitty::git::GitExecutor;

/// Environment variable holding the log filter (`RUST_LOG` syntax)
const LOG_ENV: &str = "GITTY_LOG";

#[derive(Parser)]
#[command(name = "gitty", version, about)]
struct Cli {
    /// Repository to open (defaults to current directory)
    path: Option<PathBuf>,

    /// Start with vim navigation enabled
    #[arg(long)]
    vim: bool,

    /// Number of commits loaded into the History panel
    #[arg(long, value_name = "N")]
    commits: Option<usize>,

    /// Write logs to this file (nothing is logged without it)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        init_tracing(path)?;
    }

    let start = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = GitExecutor::with_repo_path(start.clone())
        .toplevel()
        .wrap_err_with(|| format!("cannot open repository at {}", start.display()))?;

    let mut config = config::load_config(&root);
    if cli.vim {
        config.vim.enabled_on_start = true;
    }
    if let Some(limit) = cli.commits {
        config.history.commit_limit = limit;
    }

    let repo_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    info!(root = %root.display(), ?config, "starting gitty");

    let git = GitExecutor::with_repo_path(root);
    let app = App::new(Box::new(git), config, repo_name);

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications disappear without input.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}

fn init_tracing(log_path: &Path) -> color_eyre::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let file = File::options()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err_with(|| format!("cannot open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|error| eyre!(error))?;

    Ok(())
}
