// src/cli/handlers.rs
//! Command handlers. Each returns the text to print.

use std::fmt::Write;

use anyhow::{Context, Result};

use super::args::{RankArgs, TableArgs};
use crate::config::Config;
use crate::graph::{filter, GraphEngine};
use crate::identity::IdentityResolver;
use crate::input;
use crate::reporting;

/// Applies command-line overrides on top of file/default settings.
pub fn apply_rank_overrides(config: &mut Config, args: &RankArgs) {
    apply_table_overrides(config, &args.tables);
    if let Some(emails) = &args.emails {
        config.input.emails.clone_from(emails);
    }
    if let Some(damping) = args.damping {
        config.rank.damping_factor = damping;
    }
    if let Some(tolerance) = args.tolerance {
        config.rank.tolerance = tolerance;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.rank.max_iterations = max_iterations;
    }
    if let Some(threshold) = args.threshold {
        config.rank.score_threshold = threshold;
    }
}

fn apply_table_overrides(config: &mut Config, tables: &TableArgs) {
    if let Some(persons) = &tables.persons {
        config.input.persons.clone_from(persons);
    }
    if let Some(aliases) = &tables.aliases {
        config.input.aliases.clone_from(aliases);
    }
}

/// Loads the data set, ranks it and renders the report.
///
/// # Errors
/// Returns error on invalid configuration, unreadable input or serialization failure.
pub fn handle_rank(config: &Config, args: &RankArgs) -> Result<String> {
    config.validate()?;

    let dataset = input::load_dataset(&config.input).context("failed to load input tables")?;
    let resolver = IdentityResolver::new(&dataset.aliases, &dataset.persons);
    let records = dataset
        .records
        .iter()
        .map(|(from, to)| (from.as_str(), to.as_str()));

    let (mut graph, mut ranking) = GraphEngine::build(&resolver, records, &config.rank);
    if let Some(focus) = &args.focus {
        let anchor = resolver.resolve(focus);
        ranking = GraphEngine::focus_on(&mut graph, &config.rank, &anchor);
    }

    if args.all {
        return reporting::render(&graph, &graph, &ranking, args.format, args.top);
    }
    let view = filter::above_threshold(&graph, config.rank.score_threshold);
    reporting::render(&view, &graph, &ranking, args.format, args.top)
}

/// Resolves each raw string and lists `raw -> identity`.
///
/// # Errors
/// Returns error if the alias or person table cannot be loaded.
pub fn handle_resolve(config: &Config, tables: &TableArgs, raw: &[String]) -> Result<String> {
    let mut config = config.clone();
    apply_table_overrides(&mut config, tables);

    let persons = input::load_persons(&config.input.persons).context("failed to load person table")?;
    let aliases = input::load_aliases(&config.input.aliases).context("failed to load alias table")?;
    let resolver = IdentityResolver::new(&aliases, &persons);

    let mut out = String::new();
    for value in raw {
        let _ = writeln!(out, "{value} -> {}", resolver.resolve(value));
    }
    Ok(out)
}
