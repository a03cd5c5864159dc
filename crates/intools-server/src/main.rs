// SPDX-License-Identifier: Apache-2.0

//! Binary entry point for the InternalTools employee directory.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = intools_core::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");
    cli.apply(&mut config);

    intools_server::run_http(
        &config.server.host,
        config.server.port,
        config.security.profile,
    )
    .await
    .with_context(|| {
        format!(
            "Server on {}:{} stopped with an error",
            config.server.host, config.server.port
        )
    })
}
