//! Product API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Storefront-facing catalog routes
pub fn public_routes() -> Router<ServerState> {
    Router::new().nest(
        "/api/products",
        Router::new()
            .route("/", get(handler::list))
            .route("/offers", get(handler::list_offer_products))
            .route("/{id}", get(handler::get_by_id)),
    )
}

/// Back-office product routes (admin token required)
pub fn admin_routes() -> Router<ServerState> {
    Router::new().nest(
        "/api/products",
        Router::new()
            .route("/", post(handler::create))
            .route("/{id}", put(handler::update).delete(handler::delete)),
    )
}
