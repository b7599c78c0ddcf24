//! Checkout API Handlers
//!
//! Thin HTTP shell over the [`CheckoutSession`](crate::checkout::CheckoutSession)
//! reducer. Every response carries the full checkout view so the
//! storefront renders state, coupon outcome and authoritative pricing
//! from one payload.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shared::checkout::{CheckoutState, CouponStatus, CustomerInfo, OrderSummary};
use shared::sync::action;

use crate::api::convert::record_id_string;
use crate::api::validate_session_id;
use crate::core::{Config, ServerState};
use crate::db::models::{Order, OrderCreate};
use crate::db::repository::{CouponRepository, OrderRepository};
use crate::pricing::AppliedCoupon;
use crate::sessions::Session;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};

const RESOURCE_ORDER: &str = "order";

/// Checkout session as the storefront sees it
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub state: CheckoutState,
    pub customer: CustomerInfo,
    pub coupon_status: CouponStatus,
    pub summary: OrderSummary,
}

fn checkout_view(session: &Session, config: &Config) -> CheckoutView {
    let subtotal = session.cart.total_price();
    CheckoutView {
        state: session.checkout.state(),
        customer: session.checkout.customer().clone(),
        coupon_status: session.checkout.coupon_status(),
        summary: session.checkout.summary(subtotal, config),
    }
}

/// GET /api/checkout/:session
pub async fn get_checkout(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<AppResponse<CheckoutView>>> {
    validate_session_id(&session)?;
    let view = state
        .sessions
        .with_session(&session, |s| checkout_view(s, &state.config));
    Ok(ok(view))
}

/// POST /api/checkout/:session/info
///
/// Stores the customer form and, when the required fields are present,
/// moves the session into `Reviewing`.
pub async fn submit_info(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Json(customer): Json<CustomerInfo>,
) -> AppResult<Json<AppResponse<CheckoutView>>> {
    validate_session_id(&session)?;
    validate_required_text(&customer.full_name, "full_name", MAX_NAME_LEN)?;
    validate_required_text(&customer.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&customer.phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    if customer.payment_method.len() > MAX_SHORT_TEXT_LEN {
        return Err(AppError::validation("payment_method is too long"));
    }

    let view = state
        .sessions
        .with_session(&session, |s| -> Result<CheckoutView, AppError> {
            s.checkout.submit_info(customer)?;
            Ok(checkout_view(s, &state.config))
        })?;
    Ok(ok(view))
}

#[derive(Debug, Deserialize)]
pub struct CouponRequest {
    pub code: String,
}

/// POST /api/checkout/:session/coupon
///
/// Checks a code against the active coupons, case-insensitively. An
/// unknown or inactive code is a visible rejection in the view
/// (`coupon_status: invalid`), not an HTTP error.
pub async fn apply_coupon(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Json(req): Json<CouponRequest>,
) -> AppResult<Json<AppResponse<CheckoutView>>> {
    validate_session_id(&session)?;
    validate_required_text(&req.code, "code", MAX_NAME_LEN)?;

    let repo = CouponRepository::new(state.db.clone());
    let coupon = repo.find_active_by_code(&req.code).await?;

    let view = state.sessions.with_session(&session, |s| {
        match coupon {
            Some(c) => s.checkout.apply_coupon(AppliedCoupon {
                code: c.code,
                discount_percentage: c.discount_percentage,
            }),
            None => s.checkout.reject_coupon(),
        }
        checkout_view(s, &state.config)
    });
    Ok(ok(view))
}

/// DELETE /api/checkout/:session/coupon
///
/// The user edited the code field: any prior application resets.
pub async fn clear_coupon(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<AppResponse<CheckoutView>>> {
    validate_session_id(&session)?;
    let view = state.sessions.with_session(&session, |s| {
        s.checkout.clear_coupon();
        checkout_view(s, &state.config)
    });
    Ok(ok(view))
}

/// POST /api/checkout/:session/place
///
/// Snapshots the cart and pricing, persists the order and clears the
/// cart. On a persistence failure the session drops back to a retryable
/// `Failed` state with cart and form intact - the user resubmits
/// manually, nothing retries automatically.
pub async fn place_order(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<AppResponse<Order>>> {
    validate_session_id(&session)?;

    let draft = state
        .sessions
        .with_session(&session, |s| -> Result<OrderCreate, AppError> {
            if s.cart.is_empty() {
                return Err(AppError::validation("Cart is empty"));
            }
            s.checkout.begin_submit()?;
            let summary = s.checkout.summary(s.cart.total_price(), &state.config);
            Ok(OrderCreate {
                items: s.cart.lines().to_vec(),
                customer: s.checkout.customer().clone(),
                summary,
            })
        })?;

    let repo = OrderRepository::new(state.db.clone());
    match repo.place(draft).await {
        Ok(order) => {
            state.sessions.with_session(&session, |s| {
                s.cart.clear();
                s.checkout.complete();
            });
            let id = record_id_string(&order.id);
            tracing::info!(order = %id, total = order.summary.total_cost, "Order placed");
            state
                .broadcast_sync(RESOURCE_ORDER, action::CREATED, &id, Some(&order))
                .await;
            Ok(ok(order))
        }
        Err(e) => {
            state
                .sessions
                .with_session(&session, |s| s.checkout.fail());
            Err(e.into())
        }
    }
}
