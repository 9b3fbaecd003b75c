//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod apply;
pub mod check;
pub mod init;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a rule file to text files
    Apply(apply::ApplyArgs),

    /// Check whether a string is a source or target of a rule file
    Check(check::CheckArgs),

    /// Parse and validate a rule file
    Validate(validate::ValidateArgs),

    /// Write a sample rule file
    Init(init::InitArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Apply(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Init(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the level derived from `verbose`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
