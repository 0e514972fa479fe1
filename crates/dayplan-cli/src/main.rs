//! dayplan CLI: Command-line interface for the dayplan daily scheduler

use clap::{Parser, Subcommand};
use dayplan_engine::Config;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DAYPLAN_LOG";

/// Plan your day on a timeline in the terminal
#[derive(Parser)]
#[command(name = "dayplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the scheduler (default when no command specified)
    Tui {
        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON
    Config {
        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            fail(&format!("Failed to open log file {}: {e}", path.display()));
        }
    }

    match cli.command {
        None => cmd_tui(None),
        Some(Commands::Tui { config }) => cmd_tui(config.as_deref()),
        Some(Commands::Config { config }) => cmd_config(config.as_deref()),
        Some(Commands::Init { path }) => cmd_init(&path),
    }
}

/// Install a file-backed subscriber filtered by `DAYPLAN_LOG`.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(path: Option<&Path>) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => fail(&format!("Failed to load config: {e}")),
    }
}

fn cmd_tui(config_path: Option<&Path>) {
    let config = load_config(config_path);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => fail(&format!("Failed to create tokio runtime: {e}")),
    };
    if let Err(e) = rt.block_on(dayplan_tui::run_tui(&config)) {
        tracing::error!(error = %e, "TUI failed");
        fail(&e.to_string());
    }
}

fn cmd_config(config_path: Option<&Path>) {
    let mut config = load_config(config_path);
    config.ui = config.ui.with_env_overrides();

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("Failed to serialize config: {e}")),
    }
}

fn cmd_init(path: &Path) {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return;
    }

    match Config::default().save(path) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => fail(&format!("Failed to write config: {e}")),
    }
}

/// Report an error and exit with status 1.
fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
