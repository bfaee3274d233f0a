mod app;
mod rc_input;
mod terminal;
mod theme;
mod view;

use app::SessionEnd;
use clap::Parser;
use cms_core::menus::{build_menu_tree, default_store};
use cms_core::{CmsConfig, ConfigError, MemoryStore, SharedStore};
use rc_input::RcInput;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "cms",
    version,
    about = "Browse and edit flight controller configuration menus"
)]
struct Cli {
    /// Configuration file (defaults to config/cms.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the persisted store location
    #[arg(long)]
    store: Option<PathBuf>,
    /// Do not persist the store when the session closes
    #[arg(long)]
    no_save: bool,
    /// Expose the virtual current meter entries
    #[arg(long)]
    virtual_current_meter: bool,
    /// Write logs to this file; the TUI owns the terminal otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.log_file.as_deref())?;
    info!("Starting cms");
    debug!(config = ?cli.config, store = ?cli.store, "CLI arguments parsed");

    let mut config = CmsConfig::load(cli.config.as_deref())?;
    if cli.virtual_current_meter {
        config.features.virtual_current_meter = true;
    }
    if cli.no_save {
        config.save_on_exit = false;
    }
    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path());

    let tree = build_menu_tree(&config.features)?;
    let store = SharedStore::new(load_store(&store_path)?);
    let rc_input = RcInput::spawn(store.clone());

    let mut terminal = terminal::init_terminal()?;
    let mut session_store = store.clone();
    let result = app::run_session(&mut terminal, &tree, &mut session_store);
    terminal::restore_terminal()?;
    rc_input.stop();

    match result? {
        SessionEnd::Closed if config.save_on_exit => {
            store.lock().save(&store_path)?;
            info!(path = %store_path.display(), "Configuration saved");
        }
        SessionEnd::Closed => info!("Session closed, saving disabled"),
        SessionEnd::Discarded => info!("Session discarded, nothing saved"),
    }
    Ok(())
}

/// Factory defaults overlaid with whatever was persisted last time
fn load_store(path: &Path) -> Result<MemoryStore, ConfigError> {
    let mut store = default_store();
    match MemoryStore::load(path) {
        Ok(saved) => {
            store.merge(&saved);
            info!(path = %path.display(), "Loaded configuration store");
        }
        Err(ConfigError::NotFound { .. }) => {
            warn!(path = %path.display(), "No saved configuration, using defaults");
        }
        Err(err) => return Err(err),
    }
    Ok(store)
}

fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(path) = log_file else {
        // The alternate screen would be garbled by log lines.
        fmt().with_env_filter(EnvFilter::new("off")).init();
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();
    Ok(())
}
