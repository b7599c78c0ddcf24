//! Coupon API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::sync::action;

use crate::api::convert::record_id_string;
use crate::core::ServerState;
use crate::db::models::{Coupon, CouponCreate, CouponUpdate};
use crate::db::repository::CouponRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok};

const RESOURCE_COUPON: &str = "coupon";

/// GET /api/coupons (admin)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Coupon>>>> {
    let repo = CouponRepository::new(state.db.clone());
    Ok(ok(repo.find_all().await?))
}

/// POST /api/coupons (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<CouponCreate>,
) -> AppResult<Json<AppResponse<Coupon>>> {
    validate_required_text(&data.code, "code", MAX_NAME_LEN)?;

    let repo = CouponRepository::new(state.db.clone());
    let coupon = repo.create(data).await?;

    let id = record_id_string(&coupon.id);
    state
        .broadcast_sync(RESOURCE_COUPON, action::CREATED, &id, Some(&coupon))
        .await;
    Ok(ok(coupon))
}

/// PUT /api/coupons/:id (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<CouponUpdate>,
) -> AppResult<Json<AppResponse<Coupon>>> {
    validate_optional_text(&data.code, "code", MAX_NAME_LEN)?;

    let repo = CouponRepository::new(state.db.clone());
    let coupon = repo.update(&id, data).await?;

    let id = record_id_string(&coupon.id);
    state
        .broadcast_sync(RESOURCE_COUPON, action::UPDATED, &id, Some(&coupon))
        .await;
    Ok(ok(coupon))
}

/// DELETE /api/coupons/:id (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = CouponRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Coupon {id}")))?;

    repo.delete(&id).await?;

    let id = record_id_string(&existing.id);
    state
        .broadcast_sync(RESOURCE_COUPON, action::DELETED, &id, None::<&Coupon>)
        .await;
    Ok(ok(()))
}
