//! Offer API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Storefront-facing offer routes (live offers only)
pub fn public_routes() -> Router<ServerState> {
    Router::new().nest(
        "/api/offers",
        Router::new().route("/", get(handler::list_live)),
    )
}

/// Back-office offer routes (admin token required)
pub fn admin_routes() -> Router<ServerState> {
    Router::new().nest(
        "/api/offers",
        Router::new()
            .route("/", post(handler::create))
            .route("/all", get(handler::list_all))
            .route("/{id}", put(handler::update).delete(handler::delete)),
    )
}
