//! Prefix trie for autocomplete
//!
//! [`PrefixIndex`] stores a growing set of strings and enumerates every stored
//! string that starts with a given prefix.
//!
//! # Design
//!
//! Nodes live in a single `Vec` and refer to their children by index, so the
//! whole tree is owned by the index and freed in one go. Each node maps a
//! `char` to a child index with an [`FxHashMap`]. Nodes are created on the
//! first insert that walks through a missing character, and never removed.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity                                        |
//! |------------|---------------------------------------------------|
//! | `insert`   | O(m)                                              |
//! | `contains` | O(m)                                              |
//! | `search`   | O(m) descent + O(matches × average match length)  |
//!
//! # Example
//!
//! ```rust
//! use esports_core::trie::PrefixIndex;
//!
//! let index: PrefixIndex = ["alice", "alicia", "bob"].into_iter().collect();
//!
//! let mut found = index.search("ali");
//! found.sort();
//! assert_eq!(found, vec!["alice", "alicia"]);
//! assert!(index.search("z").is_empty());
//! ```

use rustc_hash::FxHashMap;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, NodeId>,
    /// A stored string ends at this node
    terminal: bool,
}

/// A set of strings searchable by prefix
///
/// Results of [`search`](PrefixIndex::search) come back in no particular
/// order. Sort them if you need a stable presentation.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl PrefixIndex {
    /// Creates an index holding only the root node
    pub fn new() -> Self {
        PrefixIndex {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Number of distinct strings stored
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Stores `word`. Inserting the same word again has no effect.
    pub fn insert(&mut self, word: &str) {
        let mut current = ROOT;
        for c in word.chars() {
            current = match self.nodes[current].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(c, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Returns true if exactly `word` was inserted
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Returns every stored string that starts with `prefix`
    ///
    /// An unknown prefix yields an empty vector. The empty prefix yields every
    /// stored string.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.descend(prefix) else {
            return Vec::new();
        };

        // Depth-first over (node, path so far); the stack replaces recursion
        let mut results = Vec::new();
        let mut stack = vec![(start, prefix.to_owned())];
        while let Some((node, path)) = stack.pop() {
            let node = &self.nodes[node];
            for (&c, &child) in &node.children {
                let mut next = String::with_capacity(path.len() + c.len_utf8());
                next.push_str(&path);
                next.push(c);
                stack.push((child, next));
            }
            if node.terminal {
                results.push(path);
            }
        }
        results
    }

    /// Follows `path` from the root, returning the node it ends at
    fn descend(&self, path: &str) -> Option<NodeId> {
        path.chars()
            .try_fold(ROOT, |node, c| self.nodes[node].children.get(&c).copied())
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_concrete_prefixes() {
        let mut index = PrefixIndex::new();
        index.insert("alice");
        index.insert("alicia");
        index.insert("bob");

        assert_eq!(sorted(index.search("ali")), vec!["alice", "alicia"]);
        assert_eq!(index.search("b"), vec!["bob"]);
        assert!(index.search("z").is_empty());
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        let index: PrefixIndex = ["b", "a", "ab", "abc"].into_iter().collect();
        assert_eq!(sorted(index.search("")), vec!["a", "ab", "abc", "b"]);
    }

    #[test]
    fn test_prefix_that_is_itself_a_word() {
        let index: PrefixIndex = ["ab", "abc"].into_iter().collect();
        assert_eq!(sorted(index.search("ab")), vec!["ab", "abc"]);
        assert_eq!(index.search("abc"), vec!["abc"]);
        assert!(index.search("abcd").is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = PrefixIndex::new();
        index.insert("faker");
        index.insert("faker");
        assert_eq!(index.len(), 1);
        assert_eq!(index.search("fa"), vec!["faker"]);
    }

    #[test]
    fn test_empty_string() {
        let mut index = PrefixIndex::new();
        assert!(!index.contains(""));
        assert!(index.search("").is_empty());

        index.insert("");
        assert!(index.contains(""));
        assert_eq!(index.search(""), vec![""]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_contains_is_exact() {
        let index: PrefixIndex = ["s1mple"].into_iter().collect();
        assert!(index.contains("s1mple"));
        assert!(!index.contains("s1m"));
        assert!(!index.contains("s1mple2"));
    }

    #[test]
    fn test_multibyte_characters() {
        let index: PrefixIndex = ["zoë", "zoey", "東京"].into_iter().collect();
        assert_eq!(index.search("zoë"), vec!["zoë"]);
        assert_eq!(sorted(index.search("zo")), vec!["zoey", "zoë"]);
        assert_eq!(index.search("東"), vec!["東京"]);
    }
}
