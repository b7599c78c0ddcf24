//! Cart API module
//!
//! Session-scoped cart ledger: `{session}` is a client-chosen id (the
//! storefront generates one per browser session).

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/cart",
        Router::new()
            .route("/{session}", get(handler::get_cart).delete(handler::clear_cart))
            .route("/{session}/items", post(handler::add_item))
            .route("/{session}/offer", post(handler::add_offer))
            .route(
                "/{session}/items/{product_id}",
                put(handler::update_item).delete(handler::remove_item),
            ),
    )
}
