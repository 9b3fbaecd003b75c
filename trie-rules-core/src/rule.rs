//! Rule model
//!
//! A rule maps one or more surface forms to a single replacement target.
//! Options attached to the rule constrain where a match is accepted and how
//! the replacement is composed. Field names follow the camelCase keys used by
//! rule files so that existing JSON rule sets load unchanged.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::boundary::is_apostrophe_like;
use crate::error::{Error, Result};

/// Boundary policy applied to a candidate match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Must be surrounded by whitespace on both sides
    Alone,
    /// No boundary constraint
    Any,
    /// Must not be embedded in a larger word
    Whole,
}

/// Case handling for matching and replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Match either case of the first letter and mirror the matched casing
    Insensitive,
    /// Exact matching, target emitted verbatim
    Sensitive,
}

/// Predefined character classes usable as clip patterns and preformatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriePattern {
    /// Apostrophe-like marks: ' ` ʾ ʿ ‘ ’
    Apostrophes,
}

impl TriePattern {
    /// Name used in rule files
    pub fn as_str(&self) -> &'static str {
        match self {
            TriePattern::Apostrophes => "apostrophes",
        }
    }

    /// Check whether a character belongs to this class
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        match self {
            TriePattern::Apostrophes => is_apostrophe_like(ch),
        }
    }
}

impl fmt::Display for TriePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriePattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "apostrophes" => Ok(TriePattern::Apostrophes),
            other => Err(format!("Unknown pattern: {other}")),
        }
    }
}

/// Character class tested against the single character adjacent to a match
///
/// In rule files the literal `"apostrophes"` selects the named class; any
/// other string is compiled as a regular expression.
#[derive(Debug, Clone)]
pub enum ClipPattern {
    /// Predefined class
    Named(TriePattern),
    /// User-supplied regular expression
    Regex(Regex),
}

impl ClipPattern {
    /// Parse a clip pattern from its rule-file form
    pub fn parse(source: &str) -> Result<Self> {
        match source.parse::<TriePattern>() {
            Ok(named) => Ok(ClipPattern::Named(named)),
            Err(_) => Self::regex(source),
        }
    }

    /// Compile a regex clip pattern
    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(ClipPattern::Regex)
            .map_err(|e| Error::invalid_pattern(source, e))
    }

    /// Check whether `ch` should be clipped
    ///
    /// An empty regex never matches.
    pub fn matches(&self, ch: char) -> bool {
        match self {
            ClipPattern::Named(named) => named.matches(ch),
            ClipPattern::Regex(re) => {
                if re.as_str().is_empty() {
                    return false;
                }
                let mut buf = [0u8; 4];
                re.is_match(ch.encode_utf8(&mut buf))
            }
        }
    }

    /// Source form of the pattern
    pub fn as_str(&self) -> &str {
        match self {
            ClipPattern::Named(named) => named.as_str(),
            ClipPattern::Regex(re) => re.as_str(),
        }
    }
}

impl From<TriePattern> for ClipPattern {
    fn from(pattern: TriePattern) -> Self {
        ClipPattern::Named(pattern)
    }
}

impl PartialEq for ClipPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ClipPattern::Named(a), ClipPattern::Named(b)) => a == b,
            (ClipPattern::Regex(a), ClipPattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Serialize for ClipPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClipPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        ClipPattern::parse(&source).map_err(de::Error::custom)
    }
}

/// Payload handed to the confirmation callback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmOptions {
    /// Context strings, any of which confirms the rule
    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<String>,
}

impl ConfirmOptions {
    /// Create confirm options from a list of context strings
    pub fn any_of<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            any_of: items.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any listed string occurs in `context`
    pub fn is_found_in(&self, context: &str) -> bool {
        self.any_of.iter().any(|needle| context.contains(needle.as_str()))
    }
}

/// Options controlling how a rule matches and replaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptions {
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casing: Option<CaseSensitivity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_start_pattern: Option<ClipPattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_end_pattern: Option<ClipPattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmOptions>,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn with_casing(mut self, casing: CaseSensitivity) -> Self {
        self.casing = Some(casing);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_clip_start(mut self, pattern: impl Into<ClipPattern>) -> Self {
        self.clip_start_pattern = Some(pattern.into());
        self
    }

    pub fn with_clip_end(mut self, pattern: impl Into<ClipPattern>) -> Self {
        self.clip_end_pattern = Some(pattern.into());
        self
    }

    pub fn with_confirm(mut self, confirm: ConfirmOptions) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Whether matching ignores the case of the first letter
    #[inline]
    pub fn is_case_insensitive(&self) -> bool {
        self.casing == Some(CaseSensitivity::Insensitive)
    }
}

/// A search-and-replace rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Surface forms to find
    #[serde(alias = "from")]
    pub sources: Vec<String>,

    /// Replacement text shared by every source
    #[serde(alias = "to")]
    pub target: String,

    #[serde(default)]
    pub options: RuleOptions,
}

impl Rule {
    /// Create a rule without options
    pub fn new<I, S>(sources: I, target: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            target: target.into(),
            options: RuleOptions::default(),
        }
    }

    /// Attach options
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }
}
