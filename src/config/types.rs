use serde::Deserialize;
use std::path::PathBuf;

/// Ranking parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping.
    #[serde(default = "default_damping")]
    pub damping_factor: f64,
    /// L1 change between sweeps below which ranking stops.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Minimum score for a node to appear in the filtered graph.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            score_threshold: default_score_threshold(),
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_tolerance() -> f64 { 1e-6 }
const fn default_max_iterations() -> usize { 100 }
const fn default_score_threshold() -> f64 { 0.005 }

/// Where the tabular input lives and which columns hold the metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_persons")]
    pub persons: PathBuf,
    #[serde(default = "default_aliases")]
    pub aliases: PathBuf,
    #[serde(default = "default_emails")]
    pub emails: PathBuf,
    #[serde(default = "default_from_column")]
    pub from_column: String,
    #[serde(default = "default_to_column")]
    pub to_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            persons: default_persons(),
            aliases: default_aliases(),
            emails: default_emails(),
            from_column: default_from_column(),
            to_column: default_to_column(),
        }
    }
}

fn default_persons() -> PathBuf { PathBuf::from("input/Persons.csv") }
fn default_aliases() -> PathBuf { PathBuf::from("input/Aliases.csv") }
fn default_emails() -> PathBuf { PathBuf::from("input/Emails.csv") }
fn default_from_column() -> String { "MetadataFrom".to_string() }
fn default_to_column() -> String { "MetadataTo".to_string() }

/// On-disk layout of `mailrank.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MailRankToml {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rank: RankConfig,
    pub input: InputConfig,
}
