//! Init command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use trie_rules_core::{
    CaseSensitivity, ConfirmOptions, MatchType, RegexRule, Rule, RuleOptions, RuleSet,
    TriePattern,
};

use crate::rules_source::RuleFileFormat;

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Rule file format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: RuleFileFormat,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> Result<()> {
        let content = render(&sample_rule_set(), self.format)?;

        match &self.output {
            Some(path) => {
                fs::write(path, content)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                println!("✓ Sample rule file written to {}", path.display());
                println!();
                println!("Next steps:");
                println!("1. Edit the rules to match your sources");
                println!("2. Validate them:");
                println!("   trie-rules validate -r {}", path.display());
                println!("3. Apply them:");
                println!("   trie-rules apply -r {} -i input.txt", path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }
}

fn render(rules: &RuleSet, format: RuleFileFormat) -> Result<String> {
    let mut content = match format {
        RuleFileFormat::Toml => rules.to_toml_string()?,
        RuleFileFormat::Json => rules.to_json_string()?,
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

/// A small rule set showing every option
pub fn sample_rule_set() -> RuleSet {
    RuleSet {
        rules: vec![
            Rule::new(["Bukhari", "Bukhaaree"], "Bukhārī").with_options(
                RuleOptions::new()
                    .with_match(MatchType::Whole)
                    .with_prefix("al-"),
            ),
            Rule::new(["'Umar", "Umar"], "ʿUmar").with_options(
                RuleOptions::new()
                    .with_match(MatchType::Whole)
                    .with_casing(CaseSensitivity::Insensitive)
                    .with_clip_start(TriePattern::Apostrophes),
            ),
            Rule::new(["ala", "alaa"], "ʿalá")
                .with_options(RuleOptions::new().with_match(MatchType::Alone)),
            Rule::new(["Maalik", "Malik"], "Mālik").with_options(
                RuleOptions::new()
                    .with_match(MatchType::Whole)
                    .with_confirm(ConfirmOptions::any_of(["مالك"])),
            ),
            Rule::new(["pbuh", "PBUH"], "ﷺ"),
        ],
        preformatters: vec![TriePattern::Apostrophes],
        regex: vec![
            RegexRule::new(r"\s+([.؟!,،؛:?])", "$1", "g"),
            RegexRule::new(r"(\d+)\s?/\s?(\d+)", "$1/$2", "g"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trie_rules_core::Transliterator;

    #[test]
    fn test_sample_is_valid() {
        let rules = sample_rule_set();
        assert!(rules.validate().is_ok());

        let transliterator = Transliterator::from_rule_set(rules).unwrap();
        assert_eq!(
            transliterator.apply("’Umar read Bukhari , p. 12 / 3"),
            "ʿUmar read al-Bukhārī, p. 12/3"
        );
    }

    #[test]
    fn test_rendered_samples_parse_back() {
        let sample = sample_rule_set();

        let toml = render(&sample, RuleFileFormat::Toml).unwrap();
        assert_eq!(RuleSet::from_toml_str(&toml).unwrap(), sample);

        let json = render(&sample, RuleFileFormat::Json).unwrap();
        assert_eq!(RuleSet::from_json_str(&json).unwrap(), sample);
    }

    #[test]
    fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.json");

        InitArgs {
            format: RuleFileFormat::Json,
            output: Some(path.clone()),
        }
        .execute()
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Bukhārī\""));
        assert!(content.contains("\"clipStartPattern\": \"apostrophes\""));
    }
}
