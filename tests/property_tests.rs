//! Property-based tests using proptest
//!
//! These tests generate random inputs and verify that the heap, trie and
//! graph invariants always hold.

use esports_core::binary_heap::PriorityQueue;
use esports_core::graph::UndirectedGraph;
use esports_core::trie::PrefixIndex;
use esports_core::Heap;
use proptest::prelude::*;

use std::collections::{BTreeSet, HashSet};

/// Test that interleaved inserts and extractions always expose the minimum
fn test_insert_extract_invariant<H: Heap<i32, i32>>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut inserted = Vec::new();

    for (should_extract, value) in ops {
        if should_extract && !heap.is_empty() {
            if let Some((key, _item)) = heap.extract_min() {
                let expected = inserted.iter().min().copied();
                prop_assert_eq!(Some(key), expected);
                if let Some(pos) = inserted.iter().position(|&k| k == key) {
                    inserted.remove(pos);
                }
            }
        } else {
            heap.insert(value, value);
            inserted.push(value);
        }

        prop_assert_eq!(heap.len(), inserted.len());
        prop_assert_eq!(heap.peek().map(|(k, _)| *k), inserted.iter().min().copied());
    }

    Ok(())
}

/// Test that all extracted elements are in non-decreasing order
fn test_extract_order_invariant<H: Heap<i32, i32>>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = H::new();

    for val in &values {
        heap.insert(*val, *val);
    }

    let mut extracted = Vec::new();
    let mut last_key = i32::MIN;
    while let Some((key, _item)) = heap.extract_min() {
        prop_assert!(
            key >= last_key,
            "Extracted key {} is less than previous {}",
            key,
            last_key
        );
        last_key = key;
        extracted.push(key);
    }

    let mut expected = values;
    expected.sort_unstable();
    prop_assert_eq!(extracted, expected);

    Ok(())
}

fn word_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{0,6}", 0..40)
}

fn edges(vertices: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..vertices, 0..vertices), 0..60)
}

fn build_graph(vertices: usize, edges: &[(usize, usize)]) -> UndirectedGraph<usize> {
    let mut graph = UndirectedGraph::new();
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for (a, b) in edges {
        graph.add_edge(a, b).unwrap();
    }
    graph
}

/// Reference reachability by repeated relaxation over the edge list
fn reachable(vertices: usize, edges: &[(usize, usize)], start: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([start]);
    loop {
        let before = seen.len();
        for &(a, b) in edges {
            if seen.contains(&a) || seen.contains(&b) {
                seen.insert(a);
                seen.insert(b);
            }
        }
        if seen.len() == before {
            break;
        }
    }
    debug_assert!(seen.iter().all(|&v| v < vertices));
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_binary_insert_extract_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_insert_extract_invariant::<PriorityQueue<i32, i32>>(ops)?;
    }

    #[test]
    fn test_binary_extract_order_invariant(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_extract_order_invariant::<PriorityQueue<i32, i32>>(values)?;
    }

    #[test]
    fn test_trie_empty_prefix_returns_all(words in word_lists()) {
        let index: PrefixIndex = words.iter().collect();
        let found: BTreeSet<String> = index.search("").into_iter().collect();
        let expected: BTreeSet<String> = words.into_iter().collect();
        prop_assert_eq!(index.len(), expected.len());
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn test_trie_prefix_returns_exact_subset(words in word_lists(), prefix in "[a-d]{0,3}") {
        let index: PrefixIndex = words.iter().collect();
        let found = index.search(&prefix);
        let unique: BTreeSet<&String> = found.iter().collect();
        prop_assert_eq!(unique.len(), found.len(), "duplicate results");

        let found: BTreeSet<String> = found.into_iter().collect();
        let expected: BTreeSet<String> = words
            .into_iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn test_graph_symmetry(graph_edges in edges(8)) {
        let graph = build_graph(8, &graph_edges);
        for (a, b) in &graph_edges {
            prop_assert!(graph.neighbors(a).unwrap().any(|n| n == b));
            prop_assert!(graph.neighbors(b).unwrap().any(|n| n == a));
        }
        prop_assert_eq!(graph.edge_count(), graph_edges.len());
    }

    #[test]
    fn test_bfs_visits_each_reachable_vertex_once(graph_edges in edges(10), start in 0usize..10) {
        let graph = build_graph(10, &graph_edges);
        let order = graph.bfs(&start).unwrap();

        prop_assert_eq!(order.first(), Some(&start));
        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len(), "vertex visited twice");
        prop_assert_eq!(unique, reachable(10, &graph_edges, start));
    }

    #[test]
    fn test_bfs_within_hops_are_non_decreasing(graph_edges in edges(10), start in 0usize..10, hops in 0usize..4) {
        let graph = build_graph(10, &graph_edges);
        let within = graph.bfs_within(&start, hops).unwrap();
        prop_assert!(within.windows(2).all(|w| w[0].1 <= w[1].1));
        prop_assert!(within.iter().all(|(_, d)| *d <= hops));

        // The unbounded traversal visits the same vertices in the same order first
        let full = graph.bfs(&start).unwrap();
        let prefix: Vec<usize> = within.iter().map(|(v, _)| *v).collect();
        prop_assert_eq!(&full[..prefix.len()], &prefix[..]);
    }
}
