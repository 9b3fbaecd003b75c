//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use trie_rules_core::{contains_source, contains_target};

use crate::rules_source::RuleSource;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rule file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    pub rules: PathBuf,

    /// Is this exact string a rule source?
    #[arg(long, value_name = "TEXT", conflicts_with = "target", required_unless_present = "target")]
    pub source: Option<String>,

    /// Is this string the target of any rule?
    #[arg(long, value_name = "TEXT")]
    pub target: Option<String>,

    /// Compare targets case-insensitively
    #[arg(long, requires = "target")]
    pub ignore_case: bool,
}

impl CheckArgs {
    /// Execute the check command; prints `true` or `false`
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    fn run(&self) -> Result<bool> {
        let transliterator = RuleSource::new(&self.rules)?.transliterator()?;
        let trie = transliterator.trie();

        let found = match (&self.source, &self.target) {
            (Some(source), _) => contains_source(trie, source),
            (None, Some(target)) => contains_target(trie, target, self.ignore_case),
            (None, None) => false,
        };

        Ok(found)
    }
}
