//! Console and JSON output for ranked graphs.
//!
//! The text report is a ranked table for humans. The JSON export carries the
//! scored nodes and weighted edges for whatever draws the graph afterwards.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::graph::queries::{self, RankedNode};
use crate::graph::{DirectedEdge, MailGraph, Ranking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serializable snapshot of a scored graph.
#[derive(Debug, Serialize)]
pub struct GraphExport {
    pub iterations: usize,
    pub converged: bool,
    pub nodes: Vec<RankedNode>,
    pub edges: Vec<DirectedEdge>,
}

impl GraphExport {
    /// Nodes and edges come from `view`; per-node weights from `traffic`.
    #[must_use]
    pub fn new(view: &MailGraph, traffic: &MailGraph, ranking: &Ranking, top: Option<usize>) -> Self {
        let mut nodes = queries::ranked_nodes(view, traffic);
        if let Some(limit) = top {
            nodes.truncate(limit);
        }
        Self {
            iterations: ranking.iterations,
            converged: ranking.converged,
            nodes,
            edges: view.edge_list(),
        }
    }
}

/// Renders `view` in the requested format. In/out weights are totals over
/// `traffic`, the graph `view` was filtered from.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(
    view: &MailGraph,
    traffic: &MailGraph,
    ranking: &Ranking,
    format: OutputFormat,
    top: Option<usize>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view, traffic, ranking, top)),
        OutputFormat::Json => {
            let export = GraphExport::new(view, traffic, ranking, top);
            Ok(serde_json::to_string_pretty(&export)?)
        }
    }
}

/// Ranked table: position, identity, score, total inbound and outbound weight.
#[must_use]
pub fn render_text(view: &MailGraph, traffic: &MailGraph, ranking: &Ranking, top: Option<usize>) -> String {
    let rows = queries::ranked_nodes(view, traffic);
    let shown = top.unwrap_or(rows.len()).min(rows.len());
    let width = rows
        .iter()
        .take(shown)
        .map(|r| r.identity.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:>4}  {:<width$}  {:>10}  {:>6}  {:>6}",
            "#", "identity", "score", "in", "out"
        )
        .bold()
    );

    for (pos, row) in rows.iter().take(shown).enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {}  {:>6}  {:>6}",
            pos + 1,
            row.identity,
            format!("{:>10.6}", row.score).cyan(),
            row.in_weight,
            row.out_weight,
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(width + 36).dimmed());
    let _ = writeln!(
        out,
        "{} nodes, {} edges ({} shown)",
        view.node_count(),
        view.edge_count(),
        shown
    );
    let status = if ranking.converged {
        format!("converged after {} iterations", ranking.iterations).green()
    } else {
        format!("stopped at iteration cap ({})", ranking.iterations).yellow()
    };
    let _ = writeln!(out, "{status}");
    out
}
