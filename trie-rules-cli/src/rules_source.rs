//! Rule file loading for the CLI

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use trie_rules_core::{RuleSet, Transliterator};

use crate::error::CliError;

/// Serialization format of a rule file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleFileFormat {
    Toml,
    Json,
}

impl RuleFileFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(RuleFileFormat::Toml),
            "json" => Some(RuleFileFormat::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            RuleFileFormat::Toml => "toml",
            RuleFileFormat::Json => "json",
        }
    }
}

/// A rule file on disk
#[derive(Debug, Clone)]
pub struct RuleSource {
    path: PathBuf,
    format: RuleFileFormat,
}

impl RuleSource {
    /// Resolve a rule file path, checking existence and format
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let format = RuleFileFormat::from_path(&path)
            .ok_or_else(|| CliError::UnsupportedFormat(path.display().to_string()))?;

        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RuleFileFormat {
        self.format
    }

    /// Parse and validate the rule set
    pub fn load(&self) -> Result<RuleSet> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read rule file: {}", self.path.display()))?;

        let parsed = match self.format {
            RuleFileFormat::Toml => RuleSet::from_toml_str(&content),
            RuleFileFormat::Json => RuleSet::from_json_str(&content),
        };

        let rules = parsed
            .and_then(|rules| rules.validate().map(|()| rules))
            .map_err(|e| self.rule_file_error(e))?;

        log::info!(
            "Loaded {} rules ({} sources) from {}",
            rules.rules.len(),
            rules.source_count(),
            self.path.display()
        );

        Ok(rules)
    }

    /// Load the rule set and compile it
    pub fn transliterator(&self) -> Result<Transliterator> {
        let rules = self.load()?;
        Transliterator::from_rule_set(rules).map_err(|e| self.rule_file_error(e).into())
    }

    fn rule_file_error(&self, error: trie_rules_core::Error) -> CliError {
        CliError::RuleFileError {
            path: self.path.display().to_string(),
            message: error.to_string(),
        }
    }
}
