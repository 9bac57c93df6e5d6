// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// otabudget error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {}: {message}", .path.display())]
    Config { message: String, path: PathBuf },

    /// The artifact does not exist, cannot be read, or is not a regular file.
    #[error("cannot access artifact: {}: {source}", .path.display())]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using otabudget Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes. `2` is reserved for an over-budget artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Artifact is within budget
    Success = 0,
    /// Artifact missing or unreadable
    ArtifactUnreadable = 1,
    /// Artifact exceeds the OTA slot budget
    BudgetExceeded = 2,
    /// Configuration or argument error
    ConfigError = 3,
    /// Any failure outside the crate's error types
    InternalError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::ArtifactUnreadable { .. } => ExitCode::ArtifactUnreadable,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
