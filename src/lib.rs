//! Ranking, search and opponent graphs for an esports management platform
//!
//! This crate holds the in-memory core behind the platform's leaderboard,
//! username autocomplete and match-history queries. It works on records that
//! have already been fetched from storage and performs no I/O itself.
//!
//! # Data structures
//!
//! - **Binary min-heap** ([`binary_heap::PriorityQueue`]): O(log n) insert and extract-min, O(1) peek
//! - **Prefix trie** ([`trie::PrefixIndex`]): O(m) insert, prefix enumeration of stored strings
//! - **Undirected graph** ([`graph::UndirectedGraph`]): O(1) amortized vertex/edge insert, O(V+E) BFS
//!
//! # Consumers
//!
//! - [`leaderboard`]: top-N players by rating, using the heap with negated keys
//! - [`search`]: accounts whose username starts with a prefix, using the trie
//! - [`rivals`]: opponents faced and players reachable through matches, using the graph
//! - [`rating`]: the record patch applied after a rating update
//!
//! # Example
//!
//! ```rust
//! use esports_core::binary_heap::PriorityQueue;
//! use esports_core::Heap;
//!
//! let mut heap = PriorityQueue::new();
//! heap.insert(5, "five");
//! heap.insert(1, "one");
//! assert_eq!(heap.extract_min(), Some((1, "one")));
//! ```
//!
//! None of the types lock internally. Share a mutable instance across
//! threads only behind a `Mutex` or similar.

pub mod binary_heap;
pub mod graph;
pub mod leaderboard;
pub mod rating;
pub mod records;
pub mod rivals;
pub mod search;
pub mod traits;
pub mod trie;

// Re-export the main trait for convenience
pub use traits::Heap;
