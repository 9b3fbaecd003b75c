//! Single-pass search and replace
//!
//! At each position the trie is walked as far as the text allows and every
//! terminal passed on the way becomes a candidate. Candidates are tried from
//! the longest to the shortest; the first one that passes boundary
//! validation and confirmation wins. With no winner one char is copied
//! verbatim and scanning moves on.
//!
//! Worst case is `O(len(text) × longest source)`.

use std::convert::Infallible;
use std::fmt;

use smallvec::SmallVec;

use crate::matcher::{is_considered, is_valid_match};
use crate::preformat::preformat;
use crate::replace::compose;
use crate::rule::{ConfirmOptions, RuleOptions, TriePattern};
use crate::trie::{NodeId, Terminal, Trie};

/// An accepted match, reported to the log hook before it is replaced
#[derive(Debug, Clone, Copy)]
pub struct MatchEvent<'a> {
    /// Char index of the first matched char
    pub start: usize,
    /// Char index one past the last matched char
    pub end: usize,
    /// The matched chars
    pub matched: &'a [char],
    /// Replacement target of the rule
    pub target: &'a str,
    /// Options of the rule
    pub options: &'a RuleOptions,
}

impl MatchEvent<'_> {
    /// The matched span as a string
    pub fn matched_text(&self) -> String {
        self.matched.iter().collect()
    }
}

type ConfirmHook<'a> = Box<dyn FnMut(&ConfirmOptions) -> bool + 'a>;
type LogHook<'a> = Box<dyn FnMut(&MatchEvent<'_>) + 'a>;

/// Optional hooks and passes for a search
///
/// ```rust
/// use trie_rules_core::{build_trie, search_and_replace_with, Rule, SearchOptions, TriePattern};
///
/// let trie = build_trie(&[Rule::new(["Ka'bah"], "Kaʿbah")]);
/// let mut options = SearchOptions::new().with_preformatter(TriePattern::Apostrophes);
///
/// let output = search_and_replace_with(&trie, "the Ka’bah", &mut options);
/// assert_eq!(output, "the Kaʿbah");
/// ```
#[derive(Default)]
pub struct SearchOptions<'a> {
    confirm: Option<ConfirmHook<'a>>,
    log: Option<LogHook<'a>>,
    preformatters: Vec<TriePattern>,
}

impl<'a> SearchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate rules carrying a `confirm` payload on `callback`
    pub fn with_confirm(mut self, callback: impl FnMut(&ConfirmOptions) -> bool + 'a) -> Self {
        self.confirm = Some(Box::new(callback));
        self
    }

    /// Observe every accepted match
    pub fn with_log(mut self, hook: impl FnMut(&MatchEvent<'_>) + 'a) -> Self {
        self.log = Some(Box::new(hook));
        self
    }

    /// Add a whole-text normalisation pass
    pub fn with_preformatter(mut self, pattern: TriePattern) -> Self {
        self.preformatters.push(pattern);
        self
    }

    /// Add several normalisation passes
    pub fn with_preformatters(mut self, patterns: impl IntoIterator<Item = TriePattern>) -> Self {
        self.preformatters.extend(patterns);
        self
    }

    pub fn preformatters(&self) -> &[TriePattern] {
        &self.preformatters
    }

    pub(crate) fn prepend_preformatters(&mut self, patterns: &[TriePattern]) {
        self.preformatters.splice(0..0, patterns.iter().copied());
    }
}

impl fmt::Debug for SearchOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("confirm", &self.confirm.is_some())
            .field("log", &self.log.is_some())
            .field("preformatters", &self.preformatters)
            .finish()
    }
}

/// Replace every rule source in `text` with its target
pub fn search_and_replace(trie: &Trie, text: &str) -> String {
    let no_confirm: Option<fn(&ConfirmOptions) -> Result<bool, Infallible>> = None;
    into_ok(scan(trie, text, &[], no_confirm, |_| {}))
}

/// [`search_and_replace`] with confirmation, logging and preformatters
pub fn search_and_replace_with(trie: &Trie, text: &str, options: &mut SearchOptions<'_>) -> String {
    let SearchOptions {
        confirm,
        log,
        preformatters,
    } = options;

    let confirm = confirm
        .as_mut()
        .map(|callback| move |c: &ConfirmOptions| Ok::<_, Infallible>(callback(c)));
    let report = |event: &MatchEvent<'_>| {
        if let Some(hook) = log.as_mut() {
            hook(event);
        }
    };

    into_ok(scan(trie, text, preformatters, confirm, report))
}

/// Search and replace with a fallible confirmation callback
///
/// The first error returned by `confirm` aborts the scan and is handed back
/// unchanged.
pub fn try_search_and_replace<F, E>(
    trie: &Trie,
    text: &str,
    preformatters: &[TriePattern],
    confirm: F,
) -> Result<String, E>
where
    F: FnMut(&ConfirmOptions) -> Result<bool, E>,
{
    scan(trie, text, preformatters, Some(confirm), |_| {})
}

fn into_ok(result: Result<String, Infallible>) -> String {
    match result {
        Ok(output) => output,
        Err(never) => match never {},
    }
}

fn scan<C, L, E>(
    trie: &Trie,
    text: &str,
    preformatters: &[TriePattern],
    mut confirm: Option<C>,
    mut log: L,
) -> Result<String, E>
where
    C: FnMut(&ConfirmOptions) -> Result<bool, E>,
    L: FnMut(&MatchEvent<'_>),
{
    let text = preformat(text, preformatters);
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    let mut candidates: SmallVec<[(usize, &Terminal); 8]> = SmallVec::new();
    let mut replaced = 0usize;

    let mut i = 0;
    while i < chars.len() {
        candidates.clear();

        let mut node = NodeId::ROOT;
        let mut j = i;
        while let Some(next) = chars.get(j).and_then(|&c| trie.child(node, c)) {
            node = next;
            j += 1;
            if let Some(terminal) = trie.terminal(node) {
                candidates.push((j, terminal));
            }
        }

        let mut accepted = None;
        for &(end, terminal) in candidates.iter().rev() {
            if is_valid_match(&chars, i, end, &terminal.options)
                && is_considered(&terminal.options, &mut confirm)?
            {
                accepted = Some((end, terminal));
                break;
            }
        }

        let Some((end, terminal)) = accepted else {
            output.push(chars[i]);
            i += 1;
            continue;
        };

        log(&MatchEvent {
            start: i,
            end,
            matched: &chars[i..end],
            target: &terminal.target,
            options: &terminal.options,
        });
        tracing::trace!(start = i, end, target = %terminal.target, "accepted match");

        let replacement = compose(terminal, &chars, i, end, &output);
        for _ in 0..replacement.trim {
            output.pop();
        }
        output.push_str(&replacement.text);
        i = replacement.resume_at;
        replaced += 1;
    }

    tracing::debug!(chars = chars.len(), replaced, "search and replace finished");
    Ok(output)
}
