// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, InputConfig, MailRankToml, RankConfig};

use crate::error::{MailRankError, Result};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and applies `mailrank.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the config file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd)
    }

    /// Creates a config and applies `mailrank.toml` from `dir`.
    ///
    /// # Errors
    /// Returns error if the config file exists but is unreadable or malformed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir)?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if any ranking parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()
    }
}

impl RankConfig {
    /// Checks every parameter before any computation starts.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping_factor) {
            return Err(invalid(format!(
                "damping_factor must be in [0, 1), got {}",
                self.damping_factor
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(invalid(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be at least 1".to_string()));
        }
        if !self.score_threshold.is_finite() || self.score_threshold < 0.0 {
            return Err(invalid(format!(
                "score_threshold must be a non-negative number, got {}",
                self.score_threshold
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> MailRankError {
    MailRankError::InvalidConfig(message)
}
