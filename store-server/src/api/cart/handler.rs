//! Cart API Handlers
//!
//! All cart mutations run synchronously inside the session entry lock and
//! return the updated cart view, so the storefront can re-render from the
//! response without a second fetch.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use shared::cart::{Cart, CartLine};

use crate::api::convert::record_id_string;
use crate::api::validate_session_id;
use crate::core::{Config, ServerState};
use crate::db::repository::{OfferRepository, ProductRepository};
use crate::pricing::materialize_offer;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Cart contents plus derived totals
///
/// `delivery_fee` here is the flat-fee preview the cart page shows; the
/// checkout flow is authoritative and applies the free-shipping threshold.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total_items: u32,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
}

fn cart_view(cart: &Cart, config: &Config) -> CartView {
    let subtotal = cart.total_price();
    let delivery_fee = config.delivery_fee;
    CartView {
        items: cart.lines().to_vec(),
        total_items: cart.total_items(),
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}

/// GET /api/cart/:session
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<AppResponse<CartView>>> {
    validate_session_id(&session)?;
    let view = state
        .sessions
        .with_session(&session, |s| cart_view(&s.cart, &state.config));
    Ok(ok(view))
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    pub flavor: Option<String>,
}

/// POST /api/cart/:session/items
///
/// Adds one unit of a catalog product. Products that declare flavors
/// require a flavor selection; the same (product, flavor) pair merges
/// into the existing line.
pub async fn add_item(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Json(req): Json<AddItemRequest>,
) -> AppResult<Json<AppResponse<CartView>>> {
    validate_session_id(&session)?;
    validate_required_text(&req.product_id, "product_id", MAX_SHORT_TEXT_LEN)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&req.product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", req.product_id)))?;

    if !product.in_stock {
        return Err(AppError::validation("Product is out of stock"));
    }

    let selected_flavor = if product.flavors.is_empty() {
        None
    } else {
        let flavor = req
            .flavor
            .ok_or_else(|| AppError::validation("Flavor selection is required"))?;
        if !product.flavors.contains(&flavor) {
            return Err(AppError::validation(format!("Unknown flavor: {flavor}")));
        }
        Some(flavor)
    };

    let line = CartLine {
        product_id: record_id_string(&product.id),
        name: product.name,
        name_ar: product.name_ar,
        price: product.price,
        image: product.image,
        description: product.description,
        quantity: 1,
        selected_flavor,
    };

    let view = state.sessions.with_session(&session, |s| {
        s.cart.add(line);
        cart_view(&s.cart, &state.config)
    });
    Ok(ok(view))
}

#[derive(Debug, Deserialize)]
pub struct AddOfferRequest {
    pub offer_id: String,
}

/// POST /api/cart/:session/offer
///
/// Materializes a live offer into a synthetic cart line. Bundle members
/// that no longer resolve in the catalog are excluded from the price
/// without failing the add.
pub async fn add_offer(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Json(req): Json<AddOfferRequest>,
) -> AppResult<Json<AppResponse<CartView>>> {
    validate_session_id(&session)?;
    validate_required_text(&req.offer_id, "offer_id", MAX_SHORT_TEXT_LEN)?;

    let offer_repo = OfferRepository::new(state.db.clone());
    let offer = offer_repo
        .find_by_id(&req.offer_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {}", req.offer_id)))?;
    if !offer.is_live(Utc::now()) {
        return Err(AppError::validation("Offer is no longer available"));
    }

    let product_repo = ProductRepository::new(state.db.clone());
    let lookups = offer.product_ids.iter().map(|pid| product_repo.find_by_id(pid));
    let mut products = Vec::new();
    for result in futures::future::join_all(lookups).await {
        // unresolvable ids degrade silently; a failed lookup is still an error
        if let Some(product) = result? {
            products.push(product);
        }
    }

    let line = materialize_offer(&offer, &products);
    let view = state.sessions.with_session(&session, |s| {
        s.cart.add(line);
        cart_view(&s.cart, &state.config)
    });
    Ok(ok(view))
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// PUT /api/cart/:session/items/:product_id
///
/// Sets the quantity on every line of the product; zero or below removes
/// the product entirely.
pub async fn update_item(
    State(state): State<ServerState>,
    Path((session, product_id)): Path<(String, String)>,
    Json(req): Json<UpdateQuantityRequest>,
) -> AppResult<Json<AppResponse<CartView>>> {
    validate_session_id(&session)?;
    let view = state.sessions.with_session(&session, |s| {
        s.cart.update_quantity(&product_id, req.quantity);
        cart_view(&s.cart, &state.config)
    });
    Ok(ok(view))
}

/// DELETE /api/cart/:session/items/:product_id
///
/// Flavor-insensitive: removes every flavor variant of the product.
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((session, product_id)): Path<(String, String)>,
) -> AppResult<Json<AppResponse<CartView>>> {
    validate_session_id(&session)?;
    let view = state.sessions.with_session(&session, |s| {
        s.cart.remove(&product_id);
        cart_view(&s.cart, &state.config)
    });
    Ok(ok(view))
}

/// DELETE /api/cart/:session
pub async fn clear_cart(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<AppResponse<CartView>>> {
    validate_session_id(&session)?;
    let view = state.sessions.with_session(&session, |s| {
        s.cart.clear();
        cart_view(&s.cart, &state.config)
    });
    Ok(ok(view))
}
