// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailRankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {source} (path: {path})")]
    Csv { source: csv::Error, path: PathBuf },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MailRankError>;

// Allow `?` on std::io::Error by converting to MailRankError::Io with unknown path.
impl From<std::io::Error> for MailRankError {
    fn from(source: std::io::Error) -> Self {
        MailRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
