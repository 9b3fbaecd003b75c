//! trie-rules command-line entry point

use clap::Parser;
use trie_rules_cli::commands::Commands;

/// Rule-driven transliteration search and replace
#[derive(Debug, Parser)]
#[command(name = "trie-rules", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
