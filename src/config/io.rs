// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::{Config, MailRankToml};
use crate::error::{MailRankError, Result};

pub const CONFIG_FILE: &str = "mailrank.toml";

/// Reads `mailrank.toml` from `dir` into `config`. A missing file is not an error.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(());
    }

    let content = fs::read_to_string(&path).map_err(|source| MailRankError::Io {
        source,
        path: path.clone(),
    })?;
    parse_toml(config, &content)?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(())
}

/// Applies a TOML document on top of `config`.
///
/// # Errors
/// Returns error on malformed TOML.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: MailRankToml = toml::from_str(content)?;
    config.rank = parsed.rank;
    config.input = parsed.input;
    Ok(())
}
