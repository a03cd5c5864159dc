// SPDX-License-Identifier: Apache-2.0

//! Error types for the InternalTools server.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur during InternalTools operations.
#[derive(Error, Debug)]
pub enum IntoolsError {
    /// The search command ran but exited unsuccessfully.
    #[error("Search command failed with {status}")]
    CommandFailed {
        /// Exit status reported by the child process.
        status: ExitStatus,
        /// Captured standard error, lossily decoded.
        stderr: String,
    },

    /// The search command could not be started.
    #[error("Failed to spawn search command: {0}")]
    Spawn(#[from] std::io::Error),

    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl From<config::ConfigError> for IntoolsError {
    fn from(err: config::ConfigError) -> Self {
        IntoolsError::Config {
            message: err.to_string(),
        }
    }
}
