//! Undirected adjacency-list graph with breadth-first traversal
//!
//! # Design
//!
//! Vertices are stored in a `Vec` and addressed by a dense [`VertexId`]. A
//! fast hash map (using FxHash) maps vertex identifiers to their ids, and each
//! vertex keeps its neighbors as a list of ids in insertion order. Traversals
//! work on ids and a `Vec<bool>` visited set, and only clone identifiers when
//! building the result.
//!
//! Operations that name a vertex which was never registered fail with
//! [`GraphError::UnknownVertex`] and leave the graph untouched. Register both
//! endpoints with [`UndirectedGraph::add_vertex`] first.
//!
//! Lookups accept any borrowed form of the vertex type, the way
//! `HashMap::get` does, so an `UndirectedGraph<String>` can be queried with
//! a `&str`.
//!
//! # Example
//!
//! ```rust
//! use esports_core::graph::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::new();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(&"A", &"B").unwrap();
//! graph.add_edge(&"B", &"C").unwrap();
//!
//! assert_eq!(graph.bfs(&"A").unwrap(), vec!["A", "B", "C"]);
//! assert_eq!(graph.bfs(&"D").unwrap(), vec!["D"]);
//! ```

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Dense index of a vertex inside one graph
pub type VertexId = usize;

/// Errors returned by graph operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The named vertex was never added with `add_vertex`
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
}

#[derive(Debug, Clone)]
struct Vertex<V> {
    id: V,
    neighbors: Vec<VertexId>,
}

/// An undirected graph keyed by vertex identifier
///
/// Parallel edges are kept: calling [`add_edge`](Self::add_edge) twice for
/// the same pair lists each endpoint twice in the other's neighbors.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    vertices: Vec<Vertex<V>>,
    index: FxHashMap<V, VertexId>,
    edges: usize,
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            edges: 0,
        }
    }

    /// Registers `v` with no neighbors, or returns its id if already present
    pub fn add_vertex(&mut self, v: V) -> VertexId {
        if let Some(&id) = self.index.get(&v) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(v.clone(), id);
        self.vertices.push(Vertex {
            id: v,
            neighbors: Vec::new(),
        });
        id
    }

    /// Connects `v` and `w` in both directions
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint is not registered.
    /// Nothing is modified in that case.
    pub fn add_edge<Q>(&mut self, v: &Q, w: &Q) -> Result<(), GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let a = self.lookup(v)?;
        let b = self.lookup(w)?;
        self.vertices[a].neighbors.push(b);
        self.vertices[b].neighbors.push(a);
        self.edges += 1;
        Ok(())
    }

    pub fn contains_vertex<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(v)
    }

    /// Neighbors of `v` in the order their edges were added
    pub fn neighbors<'a, Q>(
        &'a self,
        v: &Q,
    ) -> Result<impl Iterator<Item = &'a V> + 'a, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let id = self.lookup(v)?;
        Ok(self.vertices[id]
            .neighbors
            .iter()
            .map(move |&n| &self.vertices[n].id))
    }

    /// All vertices in registration order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter().map(|vertex| &vertex.id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `add_edge` calls that succeeded, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Breadth-first traversal from `start`
    ///
    /// Every vertex reachable from `start` appears exactly once, in the order
    /// it was first discovered. `start` itself comes first.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `start` is not registered.
    pub fn bfs<Q>(&self, start: &Q) -> Result<Vec<V>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let visits = self.traverse(self.lookup(start)?, usize::MAX);
        Ok(visits
            .into_iter()
            .map(|(id, _)| self.vertices[id].id.clone())
            .collect())
    }

    /// Breadth-first traversal limited to `max_hops` edges from `start`
    ///
    /// Returns each vertex together with its hop distance, in BFS order.
    /// `max_hops == 0` yields only `start`.
    pub fn bfs_within<Q>(
        &self,
        start: &Q,
        max_hops: usize,
    ) -> Result<Vec<(V, usize)>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let visits = self.traverse(self.lookup(start)?, max_hops);
        Ok(visits
            .into_iter()
            .map(|(id, hops)| (self.vertices[id].id.clone(), hops))
            .collect())
    }

    fn lookup<Q>(&self, v: &Q) -> Result<VertexId, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(format!("{v:?}")))
    }

    fn traverse(&self, start: VertexId, max_hops: usize) -> Vec<(VertexId, usize)> {
        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back((start, 0));

        while let Some((current, hops)) = queue.pop_front() {
            order.push((current, hops));
            if hops >= max_hops {
                continue;
            }
            for &neighbor in &self.vertices[current].neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back((neighbor, hops + 1));
                }
            }
        }

        order
    }
}

impl<V> Default for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
