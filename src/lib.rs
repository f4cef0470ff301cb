//! Collectible Store API Library

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod users;

pub use config::schema::StoreConfig;
pub use error::ApiError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
