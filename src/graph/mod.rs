// src/graph/mod.rs
pub mod builder;
pub mod filter;
pub mod model;
pub mod pagerank;
pub mod queries;

pub use builder::{aggregate, EdgeAggregator};
pub use model::{DirectedEdge, MailGraph};
pub use pagerank::Ranking;

use crate::config::RankConfig;
use crate::identity::IdentityResolver;

/// Orchestrates graph construction and ranking.
pub struct GraphEngine;

impl GraphEngine {
    /// Builds the communication graph from raw records and scores every node.
    #[must_use]
    pub fn build<I, F, T>(
        resolver: &IdentityResolver,
        records: I,
        config: &RankConfig,
    ) -> (MailGraph, Ranking)
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: AsRef<str>,
    {
        let mut graph = builder::build_graph(resolver, records);
        let ranking = pagerank::rank_in_place(&mut graph, config, None);
        (graph, ranking)
    }

    /// Re-scores an existing graph with the random jump concentrated on `anchor`.
    pub fn focus_on(graph: &mut MailGraph, config: &RankConfig, anchor: &str) -> Ranking {
        pagerank::rank_in_place(graph, config, Some(anchor))
    }
}
