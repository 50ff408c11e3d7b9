pub mod app;
pub mod config;
pub mod input;
pub mod setup;
pub mod types;
pub mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use config::{default_log_path, load_config, Config};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (YAML)
    #[arg(short, long, env = "QHUB_WIZARD_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level or filter directive, overrides the config file
    #[arg(long, env = "QHUB_WIZARD_LOG")]
    log_level: Option<String>,

    /// Print the configured steps and exit
    #[arg(long)]
    print_steps: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, source) = load_config(args.config.as_deref())?;

    if args.print_steps {
        print_steps(&config);
        return Ok(());
    }

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(default_log_path);
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    setup_logging(&log_path, level)?;
    setup_panic_hook();

    match &source {
        Some(path) => info!(path = %path.display(), "config loaded"),
        None => info!("using built-in config"),
    }

    let terminal = ratatui::init();
    let app = App::new(config);
    let app_result = app.run(terminal);
    ratatui::restore();

    app_result
}

fn print_steps(config: &Config) {
    for line in step_lines(config) {
        println!("{}", line);
    }
}

/// One `index: label` line per step, indexed as the controller indexes them
fn step_lines(config: &Config) -> Vec<String> {
    config
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let optional = if step.optional { " (optional)" } else { "" };
            format!("{}: {}{}", index, step.label, optional)
        })
        .collect()
}

/// Log to a file: the terminal belongs to the TUI. `RUST_LOG` wins over `level`.
fn setup_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {:?}", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

fn setup_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal before the panic message is printed
        ratatui::restore();
        tracing::error!("wizard panicked: {}", panic_info);
        default_hook(panic_info);
    }));
}
