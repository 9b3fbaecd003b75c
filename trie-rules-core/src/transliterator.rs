//! End-to-end text pipeline
//!
//! Preformatters, then the trie scan, then regex passes in declaration
//! order. Everything is compiled once; the transliterator is immutable
//! afterwards and can be shared between threads.

use crate::config::RuleSet;
use crate::error::Result;
use crate::regex_pass::{apply_regex_replacements, compile_regex_patterns, CompiledRegexRule};
use crate::rule::TriePattern;
use crate::search::{search_and_replace_with, SearchOptions};
use crate::trie::Trie;

/// A compiled rule set ready to transform text
#[derive(Debug, Clone)]
pub struct Transliterator {
    trie: Trie,
    preformatters: Vec<TriePattern>,
    regex_passes: Vec<CompiledRegexRule>,
}

impl Transliterator {
    /// Validate `rules`, build the trie and compile regex passes
    pub fn from_rule_set(rules: RuleSet) -> Result<Self> {
        rules.validate()?;

        let regex_passes = compile_regex_patterns(&rules.regex)?;
        let trie = Trie::from_rules(&rules.rules);

        tracing::debug!(
            rules = rules.rules.len(),
            preformatters = rules.preformatters.len(),
            regex_passes = regex_passes.len(),
            "transliterator ready"
        );

        Ok(Self {
            trie,
            preformatters: rules.preformatters,
            regex_passes,
        })
    }

    /// Transform `text`
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, SearchOptions::new())
    }

    /// Transform `text` with confirmation and log hooks
    ///
    /// Preformatters configured on the rule set run before any carried by
    /// `options`.
    pub fn apply_with(&self, text: &str, mut options: SearchOptions<'_>) -> String {
        options.prepend_preformatters(&self.preformatters);

        let replaced = search_and_replace_with(&self.trie, text, &mut options);
        apply_regex_replacements(&self.regex_passes, &replaced)
    }

    /// Transform independent texts on the rayon pool
    #[cfg(feature = "parallel")]
    pub fn apply_batch<T>(&self, texts: &[T]) -> Vec<String>
    where
        T: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.apply(text.as_ref())).collect()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn preformatters(&self) -> &[TriePattern] {
        &self.preformatters
    }

    pub fn regex_pass_count(&self) -> usize {
        self.regex_passes.len()
    }
}
