// SPDX-License-Identifier: Apache-2.0

//! HTTP server for the InternalTools employee directory.
//!
//! Serves three routes over axum:
//!
//! - `/` - the search form
//! - `/search` - runs the employee search and shows its output
//! - `/health` - a plaintext status report
//!
//! Behavior of `/search` and `/health` is selected by [`Profile`]. The
//! vulnerable profile is a training fixture and must not face real users.

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use intools_core::{FixtureSecrets, Profile};
use tokio::net::{TcpListener, lookup_host};

/// Shared, immutable state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active behavior profile.
    pub profile: Profile,
    /// Credentials exposed by the vulnerable health report.
    pub secrets: Arc<FixtureSecrets>,
}

impl AppState {
    /// Creates state for `profile` with the built-in fixture secrets.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            secrets: Arc::new(FixtureSecrets::default()),
        }
    }
}

/// Builds the route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/search", get(routes::search))
        .route("/health", get(routes::health))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;
    tracing::info!(%method, %path, status = response.status().as_u16(), "Request");
    response
}

/// Resolves `host` and `port` to the first matching socket address.
///
/// Accepts IPv4 and IPv6 literals (bracketed or not) and hostnames.
pub async fn resolve_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    lookup_host((host, port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("No address found for {host}"))
}

/// Run the directory over HTTP.
///
/// Binds `host:port` and serves until Ctrl+C.
pub async fn run_http(host: &str, port: u16, profile: Profile) -> anyhow::Result<()> {
    if profile == Profile::Vulnerable {
        tracing::warn!(
            "Vulnerable profile active: /search is open to command injection and /health discloses credentials"
        );
    }

    let addr = resolve_addr(host, port).await?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, %profile, "HTTP server listening");

    axum::serve(listener, router(AppState::new(profile)))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_err() {
                tracing::warn!("Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}
