//! Rule trie
//!
//! Every rule source is inserted into one prefix tree keyed by Unicode
//! scalar values. Nodes live in a contiguous arena and refer to their
//! children by index, so lookups never chase heap pointers between nodes.
//! A terminal node carries the target and options of the last rule inserted
//! for that exact string.

use std::collections::HashMap;

use crate::case::case_variants;
use crate::rule::{Rule, RuleOptions};

/// Index of a node in the trie arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Replacement data attached to the end of a source string
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub target: String,
    pub options: RuleOptions,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, NodeId>,
    /// Set iff at least one source ends here
    terminal: Option<Terminal>,
}

/// Prefix tree of rule sources
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Build a trie from rules
    ///
    /// Sources of case-insensitive rules are inserted in both first-letter
    /// cases. Duplicate sources are resolved last-write-wins; rules with no
    /// sources contribute nothing.
    pub fn from_rules(rules: &[Rule]) -> Self {
        let mut trie = Self::new();

        for rule in rules {
            for source in &rule.sources {
                if rule.options.is_case_insensitive() {
                    for variant in case_variants(source) {
                        trie.insert(&variant, &rule.target, &rule.options);
                    }
                } else {
                    trie.insert(source, &rule.target, &rule.options);
                }
            }
        }

        tracing::debug!(
            rules = rules.len(),
            nodes = trie.node_count(),
            "built rule trie"
        );

        trie
    }

    /// Insert one source string, overwriting any existing terminal data
    pub fn insert(&mut self, source: &str, target: &str, options: &RuleOptions) {
        let mut current = NodeId::ROOT;

        for ch in source.chars() {
            current = match self.nodes[current.index()].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.index()].children.insert(ch, child);
                    child
                }
            };
        }

        self.nodes[current.index()].terminal = Some(Terminal {
            target: target.to_string(),
            options: options.clone(),
        });
    }

    /// Follow the edge labelled `ch` from `node`
    #[inline]
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&ch).copied()
    }

    /// Terminal data of `node`, if a source ends there
    #[inline]
    pub fn terminal(&self, node: NodeId) -> Option<&Terminal> {
        self.nodes[node.index()].terminal.as_ref()
    }

    /// Walk the full string from the root
    fn walk(&self, text: &str) -> Option<NodeId> {
        text.chars()
            .try_fold(NodeId::ROOT, |node, ch| self.child(node, ch))
    }

    /// Whether `text` is exactly one of the stored sources
    pub fn contains_source(&self, text: &str) -> bool {
        self.walk(text)
            .and_then(|node| self.terminal(node))
            .is_some()
    }

    /// Whether any stored rule has `text` as its target
    ///
    /// Visits every node; order does not matter.
    pub fn contains_target(&self, text: &str, case_insensitive: bool) -> bool {
        let needle = if case_insensitive {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut stack = vec![NodeId::ROOT];
        while let Some(node) = stack.pop() {
            let entry = &self.nodes[node.index()];

            if let Some(terminal) = &entry.terminal {
                let found = if case_insensitive {
                    terminal.target.to_lowercase() == needle
                } else {
                    terminal.target == needle
                };
                if found {
                    return true;
                }
            }

            stack.extend(entry.children.values().copied());
        }

        false
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of terminal nodes (distinct stored sources)
    pub fn source_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.terminal.is_some()).count()
    }

    /// True if no source has been inserted
    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::ROOT.index()].children.is_empty()
            && self.nodes[NodeId::ROOT.index()].terminal.is_none()
    }
}

/// Build a trie from rules
pub fn build_trie(rules: &[Rule]) -> Trie {
    Trie::from_rules(rules)
}

/// Whether `text` is a stored source of `trie`
pub fn contains_source(trie: &Trie, text: &str) -> bool {
    trie.contains_source(text)
}

/// Whether any rule in `trie` targets `text`
pub fn contains_target(trie: &Trie, text: &str, case_insensitive: bool) -> bool {
    trie.contains_target(text, case_insensitive)
}
