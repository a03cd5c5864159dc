// SPDX-License-Identifier: Apache-2.0

//! Employee search command construction and execution.
//!
//! The search "looks up" an employee by echoing the requested name back.
//! How the name reaches the child process depends on the [`Profile`]:
//!
//! - [`Profile::Hardened`] spawns `echo` directly with the name inside a single
//!   argument, so the text is never parsed by a command interpreter.
//! - [`Profile::Vulnerable`] interpolates the name into a shell command line
//!   and hands it to `sh -c`. Metacharacters in the name are executed.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::config::Profile;
use crate::error::IntoolsError;

/// Shell interpreter used by the vulnerable profile.
pub const SHELL: &str = "sh";

/// Program spawned by the hardened profile.
pub const ECHO: &str = "echo";

/// A fully built search command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// Command line interpreted by [`SHELL`].
    Shell {
        /// The interpolated command line.
        script: String,
    },
    /// Program with a discrete argument vector. No shell involved.
    Direct {
        /// Program to execute.
        program: String,
        /// Arguments passed verbatim.
        args: Vec<String>,
    },
}

impl SearchCommand {
    /// Builds the search command for `name` under `profile`.
    #[must_use]
    pub fn build(name: &str, profile: Profile) -> Self {
        match profile {
            Profile::Hardened => Self::Direct {
                program: ECHO.to_string(),
                args: vec![format!("Results for: {name}")],
            },
            Profile::Vulnerable => Self::Shell {
                script: format!("echo 'Results for: {name}'"),
            },
        }
    }

    fn to_command(&self) -> Command {
        match self {
            Self::Shell { script } => {
                let mut cmd = Command::new(SHELL);
                cmd.arg("-c").arg(script);
                cmd
            }
            Self::Direct { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        }
    }

    /// Runs the command to completion and returns its standard output.
    ///
    /// Output is decoded lossily as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `IntoolsError::Spawn` if the process cannot be started and
    /// `IntoolsError::CommandFailed` if it exits unsuccessfully.
    #[instrument(skip(self), fields(kind = self.kind()))]
    pub async fn run(&self) -> Result<String, IntoolsError> {
        let output = self
            .to_command()
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            error!(status = %output.status, stderr = %stderr, "Search command failed");
            return Err(IntoolsError::CommandFailed {
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = stdout.len(), "Search command completed");
        Ok(stdout)
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Shell { .. } => "shell",
            Self::Direct { .. } => "direct",
        }
    }
}

/// Runs an employee search for `name` and returns the raw command output.
///
/// # Errors
///
/// Propagates any error from [`SearchCommand::run`].
pub async fn search(name: &str, profile: Profile) -> Result<String, IntoolsError> {
    SearchCommand::build(name, profile).run().await
}
