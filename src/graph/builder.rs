// src/graph/builder.rs
//! Graph construction: identity resolution and edge weight aggregation.

use std::collections::HashMap;

use super::model::{DirectedEdge, MailGraph};
use crate::identity::{Identity, IdentityResolver};

/// Counts messages per resolved (sender, recipient) pair.
pub struct EdgeAggregator<'r> {
    resolver: &'r IdentityResolver,
    weights: HashMap<(Identity, Identity), u64>,
    records: usize,
}

impl<'r> EdgeAggregator<'r> {
    #[must_use]
    pub fn new(resolver: &'r IdentityResolver) -> Self {
        Self {
            resolver,
            weights: HashMap::new(),
            records: 0,
        }
    }

    /// Resolves both fields and counts the pair.
    pub fn push(&mut self, raw_from: &str, raw_to: &str) {
        let key = (self.resolver.resolve(raw_from), self.resolver.resolve(raw_to));
        *self.weights.entry(key).or_insert(0) += 1;
        self.records += 1;
    }

    /// Number of records pushed so far.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Materializes the accumulated weights, ordered by (source, target).
    #[must_use]
    pub fn finish(self) -> Vec<DirectedEdge> {
        let mut edges: Vec<DirectedEdge> = self
            .weights
            .into_iter()
            .map(|((source, target), weight)| DirectedEdge {
                source,
                target,
                weight,
            })
            .collect();
        edges.sort();
        edges
    }
}

/// Aggregates raw (from, to) records into weighted edges.
#[must_use]
pub fn aggregate<I, F, T>(resolver: &IdentityResolver, records: I) -> Vec<DirectedEdge>
where
    I: IntoIterator<Item = (F, T)>,
    F: AsRef<str>,
    T: AsRef<str>,
{
    let mut aggregator = EdgeAggregator::new(resolver);
    for (from, to) in records {
        aggregator.push(from.as_ref(), to.as_ref());
    }
    tracing::debug!(records = aggregator.record_count(), "aggregated records");
    aggregator.finish()
}

/// Aggregates records and loads the result into a fresh graph.
#[must_use]
pub fn build_graph<I, F, T>(resolver: &IdentityResolver, records: I) -> MailGraph
where
    I: IntoIterator<Item = (F, T)>,
    F: AsRef<str>,
    T: AsRef<str>,
{
    let edges = aggregate(resolver, records);
    let graph = MailGraph::from_edges(edges);
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built communication graph"
    );
    graph
}
