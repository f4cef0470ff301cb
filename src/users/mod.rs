//! The user API.
//!
//! # Routes
//! ```text
//! GET     /            → welcome text
//! GET     /users       → both users
//! POST    /users       → echo, 201
//! GET     /users/{id}  → one user or 404
//! PUT     /users/{id}  → echo, 200
//! DELETE  /users/{id}  → 204
//! OPTIONS /users/{id}  → Allow header, 200 or 404
//! ```

pub mod handlers;
pub mod model;

use axum::{
    routing::get,
    Router,
};

pub use model::User;

use self::handlers::*;

/// Router carrying every API route, without middleware.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .options(user_options),
        )
}
