//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Rule file could not be loaded
    RuleFileError { path: String, message: String },
    /// Rule file extension not recognised
    UnsupportedFormat(String),
    /// Processing error
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::RuleFileError { path, message } => {
                write!(f, "Invalid rule file {path}: {message}")
            }
            CliError::UnsupportedFormat(path) => write!(
                f,
                "Unsupported rule file format: {path} (expected .toml or .json)"
            ),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("notes.txt".to_string());
        assert_eq!(error.to_string(), "File not found: notes.txt");
    }

    #[test]
    fn test_rule_file_error_display() {
        let error = CliError::RuleFileError {
            path: "rules.toml".to_string(),
            message: "Invalid rule at index 2: sources is empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rule file rules.toml: Invalid rule at index 2: sources is empty"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let error = CliError::UnsupportedFormat("rules.yaml".to_string());
        assert!(error.to_string().contains("rules.yaml"));
        assert!(error.to_string().contains(".toml or .json"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("كتب/ṣaḥīḥ al-Bukhārī.txt".to_string());
        assert_eq!(error.to_string(), "File not found: كتب/ṣaḥīḥ al-Bukhārī.txt");

        let error = CliError::InvalidPattern("**[!".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: **[!");
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let result: CliResult<()> = Err(CliError::ProcessingError("pool".to_string()).into());
        let error = result.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError(_))
        ));
    }
}
