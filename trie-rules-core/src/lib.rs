//! Rule-driven trie search and replace for transliteration normalisation
//!
//! Rules map surface spellings (`"Bukhari"`, `"'Umar"`) to canonical
//! transliterations (`"Bukhārī"`, `"ʿUmar"`). All sources are stored in a
//! prefix tree and the text is scanned once, left to right; at each position
//! the longest source that satisfies its rule's constraints is replaced.
//!
//! Per-rule options control word boundaries, first-letter casing, prefix
//! insertion, clipping of adjacent apostrophes and an optional external
//! confirmation step.
//!
//! # Example
//!
//! ```rust
//! use trie_rules_core::{build_trie, search_and_replace, MatchType, Rule, RuleOptions};
//!
//! let rules = vec![
//!     Rule::new(["Bukhari"], "Bukhārī")
//!         .with_options(RuleOptions::new().with_match(MatchType::Whole).with_prefix("al-")),
//! ];
//! let trie = build_trie(&rules);
//!
//! assert_eq!(
//!     search_and_replace(&trie, "narrated by Bukhari and al-Bukhari"),
//!     "narrated by al-Bukhārī and al-Bukhārī"
//! );
//! ```
//!
//! Rule files (TOML or JSON) load into a [`RuleSet`]; a [`Transliterator`]
//! wraps the full pipeline of preformatters, trie scan and regex passes.

pub mod boundary;
pub mod case;
pub mod character_window;
pub mod config;
pub mod error;
pub mod matcher;
pub mod preformat;
pub mod regex_pass;
pub mod replace;
pub mod rule;
pub mod search;
pub mod transliterator;
pub mod trie;

pub use config::RuleSet;
pub use error::{Error, Result};
pub use regex_pass::{
    apply_regex_replacements, compile_regex_patterns, CompiledRegexRule, RegexRule,
};
pub use rule::{
    CaseSensitivity, ClipPattern, ConfirmOptions, MatchType, Rule, RuleOptions, TriePattern,
};
pub use search::{
    search_and_replace, search_and_replace_with, try_search_and_replace, MatchEvent,
    SearchOptions,
};
pub use transliterator::Transliterator;
pub use trie::{build_trie, contains_source, contains_target, NodeId, Terminal, Trie};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_exports() {
        let trie = build_trie(&[Rule::new(["pbuh"], "ﷺ")]);
        assert!(contains_source(&trie, "pbuh"));
        assert!(contains_target(&trie, "ﷺ", false));
        assert_eq!(search_and_replace(&trie, "the Prophet pbuh"), "the Prophet ﷺ");
    }
}
