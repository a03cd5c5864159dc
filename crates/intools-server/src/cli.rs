// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for the `intools` binary.

use clap::{Parser, ValueEnum};
use intools_core::{AppConfig, Profile};

/// Profile selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    /// Safe argument-vector search and secret-free health report
    Hardened,
    /// Injectable shell search and credential-leaking health report (training only)
    Vulnerable,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Hardened => Profile::Hardened,
            ProfileArg::Vulnerable => Profile::Vulnerable,
        }
    }
}

/// InternalTools employee directory.
///
/// A deliberately vulnerable web server for security training and scanner
/// fixtures. Runs hardened unless `--profile vulnerable` is given.
#[derive(Parser, Debug)]
#[command(name = "intools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Interface to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Endpoint behavior profile (overrides config)
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Enable debug-level logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command-line overrides to a loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(profile) = self.profile {
            config.security.profile = profile.into();
        }
    }
}
