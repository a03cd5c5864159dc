// SPDX-License-Identifier: Apache-2.0

//! Request handlers for the directory routes.

use axum::extract::{Query, State};
use axum::response::Html;
use intools_core::page;
use tracing::debug;

use crate::AppState;
use crate::error::AppError;

/// Query string accepted by `/search`.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Employee name. Missing means empty.
    pub name: String,
}

impl SearchParams {
    /// Picks the first `name` pair; later duplicates and other keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "name").then_some(value))
            .unwrap_or_default();
        Self { name }
    }
}

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// `GET /search?name=...`
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let params = SearchParams::from_pairs(pairs);
    debug!(profile = %state.profile, name_len = params.name.len(), "Handling search");
    let output = intools_core::search::search(&params.name, state.profile).await?;
    Ok(Html(page::render_search_results(&output, state.profile)))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> String {
    intools_core::health_report(state.profile, &state.secrets)
}
