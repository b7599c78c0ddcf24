//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - admin login
//! - [`products`] - catalog browsing (public) and product CRUD (admin)
//! - [`offers`] - live offers (public) and offer CRUD (admin)
//! - [`coupons`] - coupon CRUD (admin)
//! - [`orders`] - order back-office (admin)
//! - [`cart`] - per-session cart ledger
//! - [`checkout`] - per-session checkout flow and order placement
//!
//! Admin routes are bundled under a single
//! [`require_admin`](crate::auth::require_admin) route layer; everything
//! else is public storefront surface.

pub mod convert;

pub mod auth;
pub mod health;

// Storefront
pub mod cart;
pub mod checkout;
pub mod offers;
pub mod products;

// Back-office
pub mod coupons;
pub mod orders;

use axum::{Router, middleware};

use crate::auth::require_admin;
use crate::core::ServerState;
use crate::utils::AppError;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    let admin = Router::new()
        .merge(products::admin_routes())
        .merge(offers::admin_routes())
        .merge(coupons::router())
        .merge(orders::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(products::public_routes())
        .merge(offers::public_routes())
        .merge(cart::router())
        .merge(checkout::router())
        .merge(admin)
        .with_state(state)
}

/// Guard on client-chosen session ids in cart/checkout paths
pub(crate) fn validate_session_id(id: &str) -> Result<(), AppError> {
    validate_required_text(id, "session", MAX_SHORT_TEXT_LEN)
}
