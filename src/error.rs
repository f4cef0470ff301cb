//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::http::response::{to_spaced_json, JsonText};

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,
    #[error("Failed to render response")]
    Render(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Render(e) = &self {
            tracing::error!(error = %e, "Response serialization failed");
        }
        let message = self.to_string();
        let body = to_spaced_json(&ErrorBody { message: &message }).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to render error body");
            String::new()
        });
        JsonText::new(self.status(), body).into_response()
    }
}
