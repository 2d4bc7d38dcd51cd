// src/exit.rs
//! Process exit codes for `mailrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::MailRankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MailRankExit {
    /// Ranking completed successfully.
    Success = 0,
    /// Generic error (e.g. serialization, unexpected failure).
    Error = 1,
    /// Configuration rejected before any computation.
    InvalidConfig = 2,
    /// Input tables missing, unreadable or lacking a required column.
    InputError = 3,
}

impl MailRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching the root cause of `err`.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<MailRankError>() {
            Some(MailRankError::InvalidConfig(_) | MailRankError::Toml(_)) => Self::InvalidConfig,
            Some(
                MailRankError::Io { .. }
                | MailRankError::Csv { .. }
                | MailRankError::MissingColumn { .. },
            ) => Self::InputError,
            None => Self::Error,
        }
    }
}

impl Termination for MailRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
