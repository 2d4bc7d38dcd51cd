// src/graph/model.rs
//! The weighted communication graph and its per-node score attribute.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::identity::Identity;

/// One aggregated sender -> recipient relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DirectedEdge {
    pub source: Identity,
    pub target: Identity,
    /// Number of messages observed from `source` to `target`.
    pub weight: u64,
}

impl DirectedEdge {
    #[must_use]
    pub fn new(source: impl Into<Identity>, target: impl Into<Identity>, weight: u64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Directed weighted graph keyed by identity.
///
/// Nodes and adjacency live in ordered maps so iteration is stable across runs.
/// `outgoing` and `incoming` mirror each other; every endpoint is a node.
#[derive(Debug, Clone, Default)]
pub struct MailGraph {
    pub(crate) scores: BTreeMap<Identity, Option<f64>>,
    pub(crate) outgoing: BTreeMap<Identity, BTreeMap<Identity, u64>>,
    pub(crate) incoming: BTreeMap<Identity, BTreeMap<Identity, u64>>,
}

impl MailGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk load from aggregated edges. Nodes come from edge endpoints.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = DirectedEdge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight);
        }
        graph
    }

    /// Adds a node if missing. Existing nodes keep their score.
    pub fn add_node(&mut self, id: &str) {
        if !self.scores.contains_key(id) {
            self.scores.insert(id.to_string(), None);
        }
    }

    /// Adds `weight` to the edge `source -> target`, creating it and its endpoints
    /// as needed.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: u64) {
        self.add_node(source);
        self.add_node(target);

        *self
            .outgoing
            .entry(source.to_string())
            .or_default()
            .entry(target.to_string())
            .or_default() += weight;
        *self
            .incoming
            .entry(target.to_string())
            .or_default()
            .entry(source.to_string())
            .or_default() += weight;
    }

    /// Removes a node and every edge touching it. Returns false if absent.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.scores.remove(id).is_none() {
            return false;
        }

        if let Some(targets) = self.outgoing.remove(id) {
            for target in targets.keys() {
                detach(&mut self.incoming, target, id);
            }
        }
        if let Some(sources) = self.incoming.remove(id) {
            for source in sources.keys() {
                detach(&mut self.outgoing, source, id);
            }
        }
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.scores.contains_key(id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Nodes in identity order with their score, if ranked.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Edges ordered by (source, target).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.outgoing.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |(target, weight)| (source.as_str(), target.as_str(), *weight))
        })
    }

    /// Owned copy of the edge set.
    #[must_use]
    pub fn edge_list(&self) -> Vec<DirectedEdge> {
        self.edges()
            .map(|(s, t, w)| DirectedEdge::new(s, t, w))
            .collect()
    }

    #[must_use]
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<u64> {
        self.outgoing.get(source)?.get(target).copied()
    }

    /// Total weight leaving `id`, self-loops included.
    #[must_use]
    pub fn out_weight(&self, id: &str) -> u64 {
        self.outgoing.get(id).map_or(0, |t| t.values().sum())
    }

    /// Total weight arriving at `id`, self-loops included.
    #[must_use]
    pub fn in_weight(&self, id: &str) -> u64 {
        self.incoming.get(id).map_or(0, |s| s.values().sum())
    }

    #[must_use]
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.outgoing
            .get(id)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.incoming
            .get(id)
            .map(|s| s.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Score written by the last ranking, if any.
    #[must_use]
    pub fn score(&self, id: &str) -> Option<f64> {
        self.scores.get(id).copied().flatten()
    }

    #[must_use]
    pub fn is_ranked(&self) -> bool {
        !self.scores.is_empty() && self.scores.values().all(Option::is_some)
    }

    /// Writes the score attribute. Identities not in the graph are ignored.
    pub fn set_scores<'a, I>(&mut self, scores: I)
    where
        I: IntoIterator<Item = (&'a Identity, &'a f64)>,
    {
        for (id, score) in scores {
            if let Some(slot) = self.scores.get_mut(id) {
                *slot = Some(*score);
            }
        }
    }
}

fn detach(adjacency: &mut BTreeMap<Identity, BTreeMap<Identity, u64>>, from: &str, to: &str) {
    if let Some(neighbors) = adjacency.get_mut(from) {
        neighbors.remove(to);
        if neighbors.is_empty() {
            adjacency.remove(from);
        }
    }
}
