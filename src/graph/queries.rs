// src/graph/queries.rs
use serde::Serialize;

use super::model::MailGraph;

/// One row of a ranked listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub identity: String,
    pub score: f64,
    pub in_weight: u64,
    pub out_weight: u64,
}

/// Scored nodes of `view` by descending score, ties broken by identity.
///
/// In/out weights are read from `traffic`, normally the unfiltered graph `view`
/// was cut from, so a node's reported traffic does not shrink with the filter.
#[must_use]
pub fn ranked_nodes(view: &MailGraph, traffic: &MailGraph) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = view
        .nodes()
        .filter_map(|(id, score)| {
            score.map(|score| RankedNode {
                identity: id.to_string(),
                score,
                in_weight: traffic.in_weight(id),
                out_weight: traffic.out_weight(id),
            })
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.identity.cmp(&b.identity))
    });
    ranked
}
