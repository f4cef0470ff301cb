//! Handlers for the `/users` resource and the welcome route.
//!
//! Writes are acknowledged but never applied: POST, PUT and DELETE echo what
//! they received and leave the directory untouched.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequestParts, Path},
    http::{header, request::Parts, StatusCode},
    response::IntoResponse,
};
use percent_encoding::percent_decode_str;

use crate::error::ApiError;
use crate::http::response::{to_spaced_json, JsonText};
use crate::users::model::{self, NEXT_USER_ID};

/// Value of the `Allow` header returned by `OPTIONS /users/{id}`.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

pub const WELCOME_MESSAGE: &str = "Welcome to the Collectible Store API!";

/// The `{id}` path segment, always extracted.
///
/// Segments that do not percent-decode to UTF-8 are decoded lossily instead
/// of rejected, so every `/users/{id}` request reaches its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(UserId(id)),
            Err(rejection) => {
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                let id = percent_decode_str(raw).decode_utf8_lossy().into_owned();
                tracing::debug!(raw = raw, error = %rejection, "Decoded user id lossily");
                Ok(UserId(id))
            }
        }
    }
}

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// `GET /users`
pub async fn list_users() -> Result<JsonText, ApiError> {
    Ok(JsonText::ok(to_spaced_json(model::directory())?))
}

/// `GET /users/{id}`
pub async fn get_user(UserId(id): UserId) -> Result<JsonText, ApiError> {
    let user = model::find(&id).ok_or(ApiError::UserNotFound)?;
    Ok(JsonText::ok(to_spaced_json(user)?))
}

/// `POST /users`
///
/// The raw body is spliced into the response unparsed, so a malformed body
/// yields a malformed response.
pub async fn create_user(body: Bytes) -> JsonText {
    let body = String::from_utf8_lossy(&body);
    tracing::info!(body = %body, "Received POST request");

    JsonText::new(
        StatusCode::CREATED,
        format!(
            r#"{{"message": "User added successfully", "id": {}, "receivedData": {}}}"#,
            NEXT_USER_ID, body
        ),
    )
}

/// `PUT /users/{id}`
///
/// Answers 200 whether or not the user exists. Both the id and the body are
/// spliced in raw.
pub async fn update_user(UserId(id): UserId, body: Bytes) -> JsonText {
    let body = String::from_utf8_lossy(&body);
    tracing::info!(id = %id, body = %body, "Received PUT request");

    JsonText::ok(format!(
        r#"{{"message": "User {} updated successfully", "updatedData": {}}}"#,
        id, body
    ))
}

/// `DELETE /users/{id}`
///
/// Answers 204 whether or not the user exists.
pub async fn delete_user(UserId(id): UserId) -> StatusCode {
    tracing::info!(id = %id, "Received DELETE request");
    StatusCode::NO_CONTENT
}

/// `OPTIONS /users/{id}`
pub async fn user_options(UserId(id): UserId) -> impl IntoResponse {
    let status = if model::exists(&id) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, [(header::ALLOW, ALLOWED_METHODS)])
}
