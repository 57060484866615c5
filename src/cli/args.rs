use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for pystrap.
///
/// There are no positional arguments: the project kind and name come from
/// interactive prompts unless predefined answers are supplied.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Disable interactive prompts; missing answers become errors.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Proceed even if the project directory already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Print the command plan without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the final blocking dev-server launch.
    #[arg(long = "no-launch")]
    pub no_launch: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
