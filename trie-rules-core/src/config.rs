//! Rule set schema and rule-file parsing
//!
//! A rule set bundles trie rules, preformatters and regex passes. It is
//! plain serde data; reading files is left to callers.
//!
//! ```toml
//! preformatters = ["apostrophes"]
//!
//! [[rules]]
//! sources = ["Bukhari"]
//! target = "Bukhārī"
//! options = { match = "whole", prefix = "al-" }
//!
//! [[regex]]
//! pattern = '\s+([.,?])'
//! replacement = "$1"
//! flags = "g"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::regex_pass::RegexRule;
use crate::rule::{Rule, TriePattern};

/// Root of a rule file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Whole-text passes applied before the trie scan
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preformatters: Vec<TriePattern>,

    #[serde(alias = "searchReplaceRules", default)]
    pub rules: Vec<Rule>,

    /// Regex passes applied after the trie scan, in order
    #[serde(alias = "regexRules", default, skip_serializing_if = "Vec::is_empty")]
    pub regex: Vec<RegexRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Parse a TOML rule file
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Parse {
            format: "TOML",
            message: e.to_string(),
        })
    }

    /// Parse a JSON rule file, either an object or a bare array of rules
    pub fn from_json_str(input: &str) -> Result<Self> {
        let parse_error = |e: serde_json::Error| Error::Parse {
            format: "JSON",
            message: e.to_string(),
        };

        if input.trim_start().starts_with('[') {
            let rules: Vec<Rule> = serde_json::from_str(input).map_err(parse_error)?;
            Ok(Self::new(rules))
        } else {
            serde_json::from_str(input).map_err(parse_error)
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Parse {
            format: "TOML",
            message: e.to_string(),
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Reject rules that could never match
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.sources.is_empty() {
                return Err(Error::InvalidRule {
                    index,
                    reason: "sources is empty".to_string(),
                });
            }
            if let Some(position) = rule.sources.iter().position(String::is_empty) {
                return Err(Error::InvalidRule {
                    index,
                    reason: format!("source {position} is an empty string"),
                });
            }
        }
        Ok(())
    }

    /// Total number of source strings across all rules
    pub fn source_count(&self) -> usize {
        self.rules.iter().map(|rule| rule.sources.len()).sum()
    }
}
