// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the `intools` binary.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: info level for intools crates
//! intools
//!
//! # Per-search debug output
//! RUST_LOG=intools_core=debug intools
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug or info.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "intools=debug,intools_core=debug,intools_server=debug"
    } else {
        "intools=info,intools_core=info,intools_server=info"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
