//! Order back-office API module (admin only)
//!
//! Order creation is not here: customers place orders through the
//! checkout flow (`POST /api/checkout/{session}/place`).

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/orders",
        Router::new()
            .route("/", get(handler::list))
            .route("/income", get(handler::income))
            .route("/{id}", get(handler::get_by_id).delete(handler::delete))
            .route("/{id}/status", put(handler::update_status)),
    )
}
