//! Mad Libs - interactive story templating game
//!
//! CLI entry point.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use madlibs::cli::Cli;
use madlibs::config::Config;
use madlibs::console::{LineConsole, ReadlineConsole};
use madlibs::session::Session;

/// `{data_local_dir}/madlibs/logs/madlibs.log`
fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("madlibs")
        .join("logs")
        .join("madlibs.log")
}

/// Send tracing output to the log file; stdout belongs to the game
fn setup_logging(verbose: bool) -> Result<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context(format!("Failed to create log directory {}", dir.display()))?;
    }
    let log_file = fs::File::create(&path).context(format!("Failed to create log file {}", path.display()))?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = setup_logging(cli.verbose).context("Failed to setup logging")?;
    info!(log_file = %log_file.display(), verbose = cli.verbose, "Logging initialized");

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_template_dir(cli.template_dir);

    info!(template_dir = ?config.template_dir, banner = config.banner, "madlibs starting");

    let stats = if io::stdin().is_terminal() {
        let mut console = ReadlineConsole::new()?;
        Session::new(&mut console, &config).run()?
    } else {
        let mut console = LineConsole::new(io::stdin().lock(), io::stdout().lock());
        Session::new(&mut console, &config).run()?
    };

    info!(stories = stats.stories, replaced = stats.replaced, "madlibs exiting");
    Ok(())
}
