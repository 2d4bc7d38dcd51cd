//! Command dispatch, kept out of the binary so it stays testable.

use anyhow::Result;

use super::{
    args::Commands,
    handlers::{apply_rank_overrides, handle_rank, handle_resolve},
};
use crate::config::Config;

/// Executes the parsed command and returns its output.
///
/// # Errors
/// Returns error if loading config or the command handler fails.
pub fn execute(command: &Commands) -> Result<String> {
    let mut config = Config::load()?;

    match command {
        Commands::Rank(args) => {
            apply_rank_overrides(&mut config, args);
            handle_rank(&config, args)
        }
        Commands::Resolve { raw, tables } => handle_resolve(&config, tables, raw),
    }
}
