//! Startup announcements.

use std::net::SocketAddr;

/// Example requests logged once the listener is bound.
pub const EXAMPLE_REQUESTS: [&str; 6] = [
    "GET /users",
    "GET /users/1",
    r#"POST /users (with JSON body like {"name": "Carlos"})"#,
    r#"PUT /users/1 (with JSON body like {"name": "Alicia Updated"})"#,
    "DELETE /users/1",
    "OPTIONS /users/1",
];

/// Browsable URL for a bound address. Wildcard binds are shown as localhost.
pub fn public_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{}", addr)
    }
}

/// Log where the API is reachable and how to try it.
pub fn announce(addr: SocketAddr) {
    tracing::info!(url = %public_url(addr), "Collectible Store API is running");
    for example in EXAMPLE_REQUESTS {
        tracing::info!(request = example, "Test endpoint");
    }
}
