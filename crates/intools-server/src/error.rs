// SPDX-License-Identifier: Apache-2.0

//! Conversion from core errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use intools_core::IntoolsError;
use intools_core::page::SERVER_ERROR_HTML;

/// Error returned by request handlers.
///
/// Every variant renders as the same generic 500 page. The underlying
/// error is logged, never sent to the client.
#[derive(Debug)]
pub struct AppError(pub IntoolsError);

impl From<IntoolsError> for AppError {
    fn from(err: IntoolsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_HTML)).into_response()
    }
}
