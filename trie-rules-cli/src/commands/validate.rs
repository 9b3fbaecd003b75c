//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::rules_source::RuleSource;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Rule file to validate (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    pub rules: PathBuf,
}

/// Counts reported for a valid rule file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFileSummary {
    pub rules: usize,
    pub sources: usize,
    pub trie_nodes: usize,
    pub preformatters: usize,
    pub regex_passes: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match self.summarize() {
            Ok(summary) => {
                println!("✓ Rule file is valid!");
                println!("  Rules: {}", summary.rules);
                println!("  Sources: {}", summary.sources);
                println!("  Trie nodes: {}", summary.trie_nodes);
                println!("  Preformatters: {}", summary.preformatters);
                println!("  Regex passes: {}", summary.regex_passes);
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e:#}");
                Err(e).context("Validation failed")
            }
        }
    }

    fn summarize(&self) -> Result<RuleFileSummary> {
        let source = RuleSource::new(&self.rules)?;
        let rules = source.load()?;
        let (rule_count, source_count) = (rules.rules.len(), rules.source_count());

        let transliterator = trie_rules_core::Transliterator::from_rule_set(rules)?;

        Ok(RuleFileSummary {
            rules: rule_count,
            sources: source_count,
            trie_nodes: transliterator.trie().node_count(),
            preformatters: transliterator.preformatters().len(),
            regex_passes: transliterator.regex_pass_count(),
        })
    }
}
