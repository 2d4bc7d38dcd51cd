// src/graph/pagerank.rs
//! Weighted `PageRank` over the communication graph.

use std::collections::BTreeMap;

use super::model::MailGraph;
use crate::config::RankConfig;
use crate::identity::Identity;

/// Result of a ranking run.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub scores: BTreeMap<Identity, f64>,
    /// Sweeps performed.
    pub iterations: usize,
    /// False when the iteration cap was hit before the tolerance was met.
    pub converged: bool,
}

impl Ranking {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.scores.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Computes scores without touching the graph.
///
/// `focus` concentrates the random-jump mass on one identity; an identity that
/// is not in the graph falls back to the uniform jump.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &MailGraph, config: &RankConfig, focus: Option<&str>) -> Ranking {
    if graph.is_empty() {
        return Ranking {
            converged: true,
            ..Ranking::default()
        };
    }

    let n = graph.node_count() as f64;
    let out_weights = out_weights(graph);
    let personalization = build_personalization(graph, focus, n);
    let mut ranks = initialize_ranks(graph, n);

    for iteration in 1..=config.max_iterations {
        let next = iterate_once(&ranks, graph, &out_weights, &personalization, config.damping_factor);
        let delta = l1_distance(&ranks, &next);
        ranks = next;

        if delta < config.tolerance {
            tracing::debug!(iteration, delta, "pagerank converged");
            return finish(ranks, iteration, true);
        }
    }

    tracing::warn!(
        max_iterations = config.max_iterations,
        "pagerank hit the iteration cap before converging; returning current estimate"
    );
    finish(ranks, config.max_iterations, false)
}

/// Computes scores and writes them onto the graph's nodes.
pub fn rank_in_place(graph: &mut MailGraph, config: &RankConfig, focus: Option<&str>) -> Ranking {
    let ranking = compute(graph, config, focus);
    graph.set_scores(&ranking.scores);
    ranking
}

fn finish(ranks: BTreeMap<&str, f64>, iterations: usize, converged: bool) -> Ranking {
    Ranking {
        scores: ranks.into_iter().map(|(id, s)| (id.to_string(), s)).collect(),
        iterations,
        converged,
    }
}

fn initialize_ranks(graph: &MailGraph, n: f64) -> BTreeMap<&str, f64> {
    graph.nodes().map(|(id, _)| (id, 1.0 / n)).collect()
}

fn build_personalization<'g>(
    graph: &'g MailGraph,
    focus: Option<&str>,
    n: f64,
) -> BTreeMap<&'g str, f64> {
    match focus {
        Some(f) if graph.contains(f) => graph
            .nodes()
            .map(|(id, _)| (id, if id == f { 1.0 } else { 0.0 }))
            .collect(),
        Some(f) => {
            tracing::warn!(focus = f, "focus identity not in graph; using uniform jump");
            initialize_ranks(graph, n)
        }
        None => initialize_ranks(graph, n),
    }
}

#[allow(clippy::cast_precision_loss)]
fn out_weights(graph: &MailGraph) -> BTreeMap<&str, f64> {
    graph
        .nodes()
        .map(|(id, _)| (id, graph.out_weight(id) as f64))
        .collect()
}

fn iterate_once<'g>(
    ranks: &BTreeMap<&'g str, f64>,
    graph: &'g MailGraph,
    out_weights: &BTreeMap<&str, f64>,
    personalization: &BTreeMap<&str, f64>,
    damping: f64,
) -> BTreeMap<&'g str, f64> {
    let dangling: f64 = ranks
        .iter()
        .filter(|(id, _)| out_weights.get(*id).copied().unwrap_or(0.0) == 0.0)
        .map(|(_, rank)| rank)
        .sum();

    let mut new_ranks = BTreeMap::new();
    for &node in ranks.keys() {
        let incoming = compute_incoming_rank(node, ranks, graph, out_weights);
        let pers = personalization.get(node).copied().unwrap_or(0.0);
        new_ranks.insert(
            node,
            (1.0 - damping) * pers + damping * (incoming + dangling * pers),
        );
    }

    normalize(&mut new_ranks);
    new_ranks
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank(
    target: &str,
    ranks: &BTreeMap<&str, f64>,
    graph: &MailGraph,
    out_weights: &BTreeMap<&str, f64>,
) -> f64 {
    let Some(sources) = graph.incoming.get(target) else {
        return 0.0;
    };

    let mut rank = 0.0;
    for (source, &weight) in sources {
        let total_out = out_weights.get(source.as_str()).copied().unwrap_or(0.0);
        if total_out == 0.0 {
            continue;
        }
        let source_rank = ranks.get(source.as_str()).copied().unwrap_or(0.0);
        rank += source_rank * (weight as f64 / total_out);
    }
    rank
}

fn l1_distance(a: &BTreeMap<&str, f64>, b: &BTreeMap<&str, f64>) -> f64 {
    a.iter()
        .map(|(id, x)| (x - b.get(id).copied().unwrap_or(0.0)).abs())
        .sum()
}

// Guards against floating point drift; the update itself preserves the total.
fn normalize(ranks: &mut BTreeMap<&str, f64>) {
    let total: f64 = ranks.values().sum();
    if total > 0.0 {
        for rank in ranks.values_mut() {
            *rank /= total;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l1_distance_sums_absolute_differences() {
        let a: BTreeMap<&str, f64> = [("x", 0.25), ("y", 0.75)].into_iter().collect();
        let b: BTreeMap<&str, f64> = [("x", 0.5), ("y", 0.5)].into_iter().collect();
        assert!((l1_distance(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalize_rescales_to_one() {
        let mut ranks: BTreeMap<&str, f64> = [("x", 2.0), ("y", 6.0)].into_iter().collect();
        normalize(&mut ranks);
        assert!((ranks["x"] - 0.25).abs() < 1e-12);
        assert!((ranks["y"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn focus_outside_graph_uses_uniform_jump() {
        let graph = MailGraph::from_edges([crate::graph::DirectedEdge::new("a", "b", 1)]);
        let pers = build_personalization(&graph, Some("zed"), 2.0);
        assert!((pers["a"] - 0.5).abs() < 1e-12);
        assert!((pers["b"] - 0.5).abs() < 1e-12);
    }
}
