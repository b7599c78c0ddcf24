//! Order back-office handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shared::order::OrderStatus;
use shared::sync::action;

use crate::api::convert::record_id_string;
use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};

const RESOURCE_ORDER: &str = "order";

/// GET /api/orders (admin) - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Order>>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(ok(repo.find_all().await?))
}

/// GET /api/orders/:id (admin)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(ok(order))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// PUT /api/orders/:id/status (admin)
///
/// The sink accepts any status write; the forward-only flow is a
/// back-office convention, so an unconventional jump is logged rather
/// than rejected.
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<Json<AppResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;

    if !existing.status.can_transition_to(req.status) {
        tracing::warn!(
            order = %id,
            from = %existing.status,
            to = %req.status,
            admin = %admin.email,
            "unconventional order status transition"
        );
    }

    let order = repo.update_status(&id, req.status).await?;
    tracing::info!(order = %id, status = %req.status, admin = %admin.email, "Order status updated");

    let id = record_id_string(&order.id);
    state
        .broadcast_sync(RESOURCE_ORDER, action::UPDATED, &id, Some(&order))
        .await;
    Ok(ok(order))
}

/// DELETE /api/orders/:id (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = OrderRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;

    repo.delete(&id).await?;

    let id = record_id_string(&existing.id);
    state
        .broadcast_sync(RESOURCE_ORDER, action::DELETED, &id, None::<&Order>)
        .await;
    Ok(ok(()))
}

#[derive(Debug, Serialize)]
pub struct IncomeSummary {
    /// Sum of `total_cost` across delivered orders, in whole EGP
    pub total_income: i64,
}

/// GET /api/orders/income (admin) - dashboard income figure
pub async fn income(State(state): State<ServerState>) -> AppResult<Json<AppResponse<IncomeSummary>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(ok(IncomeSummary {
        total_income: repo.total_income().await?,
    }))
}
