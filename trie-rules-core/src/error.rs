//! Error types for rule loading and pattern compilation
//!
//! The matching core never fails; errors only arise at the edges where
//! external data (rule files, regex sources) is turned into typed values.

use thiserror::Error;

/// Error type for rule-set and pattern operations
#[derive(Debug, Error)]
pub enum Error {
    /// A clip or regex pattern failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A regex pass used a flag we cannot express
    #[error("Unsupported regex flag '{flag}' in pattern '{pattern}'")]
    UnsupportedRegexFlag { flag: char, pattern: String },

    /// Rule file could not be parsed
    #[error("Failed to parse {format} rule set: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Rule is structurally unusable
    #[error("Invalid rule at index {index}: {reason}")]
    InvalidRule { index: usize, reason: String },
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rule_display() {
        let error = Error::InvalidRule {
            index: 3,
            reason: "sources is empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid rule at index 3: sources is empty");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("[unclosed").unwrap_err();
        let error = Error::invalid_pattern("[unclosed", source);

        assert!(error.to_string().starts_with("Invalid pattern '[unclosed'"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_parse_error_display() {
        let error = Error::Parse {
            format: "TOML",
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse TOML rule set: expected `=`"
        );
    }
}
