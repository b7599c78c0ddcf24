//! Checkout API module
//!
//! Session-scoped checkout flow: customer info, coupon application and
//! order placement. The pricing returned here applies the free-shipping
//! threshold and is the authoritative order total.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/checkout",
        Router::new()
            .route("/{session}", get(handler::get_checkout))
            .route("/{session}/info", post(handler::submit_info))
            .route(
                "/{session}/coupon",
                post(handler::apply_coupon).delete(handler::clear_coupon),
            )
            .route("/{session}/place", post(handler::place_order)),
    )
}
