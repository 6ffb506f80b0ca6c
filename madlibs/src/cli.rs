//! CLI argument parsing for madlibs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "madlibs")]
#[command(author, version, about = "Fill in the blanks of a story template", long_about = None)]
#[command(after_help = "Logs are written to: ~/.local/share/madlibs/logs/madlibs.log")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to resolve template file names against
    #[arg(short, long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}
