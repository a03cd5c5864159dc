// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # InternalTools Core
//!
//! Core library for the InternalTools employee directory, a deliberately
//! vulnerable training server.
//!
//! This crate provides the request-independent pieces of the server:
//! - Configuration management and the [`Profile`] switch
//! - Page bodies for the index and search results
//! - Employee search command construction and execution
//! - Health report rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intools_core::{Profile, page, search};
//!
//! # async fn example() -> Result<(), intools_core::IntoolsError> {
//! let output = search::search("alice", Profile::Hardened).await?;
//! let html = page::render_search_results(&output, Profile::Hardened);
//! assert!(html.contains("Results for: alice"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`health`] - `/health` body rendering
//! - [`page`] - HTML bodies
//! - [`search`] - Search command execution

pub mod config;
pub mod error;
pub mod health;
pub mod page;
pub mod search;

pub use config::{AppConfig, Profile, load_config};
pub use error::IntoolsError;
pub use health::{FixtureSecrets, health_report};
pub use search::SearchCommand;
