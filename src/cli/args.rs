use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "mailrank", version, about = "Rank email correspondents by influence")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the correspondence graph and rank participants with PageRank
    Rank(RankArgs),
    /// Show the identity each raw sender/recipient string resolves to
    Resolve {
        /// Raw name or address fields
        #[arg(required = true)]
        raw: Vec<String>,
        #[command(flatten)]
        tables: TableArgs,
    },
}

/// Overrides for the alias and person table locations.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Person table (Id, Name)
    #[arg(long, value_name = "FILE")]
    pub persons: Option<PathBuf>,
    /// Alias table (Alias, PersonId)
    #[arg(long, value_name = "FILE")]
    pub aliases: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    #[command(flatten)]
    pub tables: TableArgs,
    /// Email table with sender/recipient metadata
    #[arg(long, value_name = "FILE")]
    pub emails: Option<PathBuf>,
    /// Probability of following a link rather than jumping
    #[arg(long)]
    pub damping: Option<f64>,
    /// Convergence threshold on the L1 change between sweeps
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Hard cap on sweeps
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Minimum score for a node to be reported
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Concentrate the random jump on this participant (personalized ranking)
    #[arg(long, value_name = "NAME")]
    pub focus: Option<String>,
    /// Report only the first N nodes
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
    /// Report every node, ignoring the score threshold
    #[arg(long)]
    pub all: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
