//! Opponent lookups over match history
//!
//! [`RivalIndex`] is an [`UndirectedGraph`] of players where an edge means
//! the two met in a match. Answers "who has this player faced" (direct
//! neighbors) and "who is connected to this player through any chain of
//! matches" (breadth-first reachability).

use crate::graph::{GraphError, UndirectedGraph};
use crate::records::MatchRecord;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct RivalIndex {
    graph: UndirectedGraph<String>,
}

impl RivalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from `(player, opponent)` pairs
    pub fn from_pairings<I, S>(pairings: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut index = RivalIndex::new();
        for (a, b) in pairings {
            index.record_pairing(a.into(), b.into());
        }
        index
    }

    /// Builds the index from stored matches
    ///
    /// Every pair of distinct participants in a match is connected. Matches
    /// with fewer than two participants add their players without edges.
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        let mut index = RivalIndex::new();
        let mut count = 0usize;
        for record in matches {
            count += 1;
            let players = &record.participants;
            for p in players {
                index.graph.add_vertex(p.clone());
            }
            for (i, a) in players.iter().enumerate() {
                for b in players.iter().skip(i + 1).filter(|b| *b != a) {
                    index.record_pairing(a.clone(), b.clone());
                }
            }
        }
        tracing::debug!(
            matches = count,
            players = index.graph.vertex_count(),
            pairings = index.graph.edge_count(),
            "built rival index"
        );
        index
    }

    /// Registers both players and connects them
    pub fn record_pairing(&mut self, a: String, b: String) {
        self.graph.add_vertex(a.clone());
        self.graph.add_vertex(b.clone());
        // Both endpoints are registered, so this cannot fail
        if let Err(err) = self.graph.add_edge(&a, &b) {
            tracing::warn!(error = %err, "failed to record pairing");
        }
    }

    pub fn contains_player(&self, player: &str) -> bool {
        self.graph.contains_vertex(player)
    }

    pub fn player_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Distinct opponents of `player`, in the order they were first met
    pub fn opponents_faced(&self, player: &str) -> Result<Vec<String>, GraphError> {
        let mut seen = FxHashSet::default();
        Ok(self
            .graph
            .neighbors(player)?
            .filter(|opponent| seen.insert(*opponent))
            .cloned()
            .collect())
    }

    /// Every player reachable through a chain of matches, `player` first
    pub fn connected_players(&self, player: &str) -> Result<Vec<String>, GraphError> {
        self.graph.bfs(player)
    }

    /// Players within `hops` matches of `player`, with their distance
    pub fn rivals_within(
        &self,
        player: &str,
        hops: usize,
    ) -> Result<Vec<(String, usize)>, GraphError> {
        self.graph.bfs_within(player, hops)
    }
}
