// src/graph/filter.rs
//! Score thresholding for display.

use super::model::MailGraph;

/// Builds a new graph restricted to nodes scoring at least `threshold`.
///
/// Unscored nodes are dropped. Surviving nodes keep their scores and the
/// edges between them keep their weights; `graph` is left untouched.
#[must_use]
pub fn above_threshold(graph: &MailGraph, threshold: f64) -> MailGraph {
    let mut view = MailGraph::new();

    let kept: Vec<(&str, f64)> = graph
        .nodes()
        .filter_map(|(id, score)| score.filter(|s| *s >= threshold).map(|s| (id, s)))
        .collect();

    for (id, score) in &kept {
        view.add_node(id);
        if let Some(slot) = view.scores.get_mut(*id) {
            *slot = Some(*score);
        }
    }

    for (source, target, weight) in graph.edges() {
        if view.contains(source) && view.contains(target) {
            view.add_edge(source, target, weight);
        }
    }

    tracing::debug!(
        threshold,
        kept = view.node_count(),
        dropped = graph.node_count() - view.node_count(),
        "filtered graph by score"
    );
    view
}
