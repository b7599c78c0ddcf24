//! Offer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::sync::action;

use crate::api::convert::record_id_string;
use crate::core::ServerState;
use crate::db::models::{Offer, OfferCreate, OfferUpdate};
use crate::db::repository::OfferRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};

const RESOURCE_OFFER: &str = "offer";

/// GET /api/offers - offers that are active and not yet expired
pub async fn list_live(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Offer>>>> {
    let repo = OfferRepository::new(state.db.clone());
    Ok(ok(repo.find_live().await?))
}

/// GET /api/offers/all (admin) - every offer, expired and inactive included
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Offer>>>> {
    let repo = OfferRepository::new(state.db.clone());
    Ok(ok(repo.find_all().await?))
}

/// POST /api/offers (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<OfferCreate>,
) -> AppResult<Json<AppResponse<Offer>>> {
    validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&data.title_ar, "title_ar", MAX_NAME_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.description_ar, "description_ar", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.image_url, "image_url", MAX_URL_LEN)?;

    let repo = OfferRepository::new(state.db.clone());
    let offer = repo.create(data).await?;

    let id = record_id_string(&offer.id);
    state
        .broadcast_sync(RESOURCE_OFFER, action::CREATED, &id, Some(&offer))
        .await;
    Ok(ok(offer))
}

/// PUT /api/offers/:id (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<OfferUpdate>,
) -> AppResult<Json<AppResponse<Offer>>> {
    validate_optional_text(&data.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&data.title_ar, "title_ar", MAX_NAME_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.description_ar, "description_ar", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.image_url, "image_url", MAX_URL_LEN)?;

    let repo = OfferRepository::new(state.db.clone());
    let offer = repo.update(&id, data).await?;

    let id = record_id_string(&offer.id);
    state
        .broadcast_sync(RESOURCE_OFFER, action::UPDATED, &id, Some(&offer))
        .await;
    Ok(ok(offer))
}

/// DELETE /api/offers/:id (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = OfferRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {id}")))?;

    repo.delete(&id).await?;

    let id = record_id_string(&existing.id);
    state
        .broadcast_sync(RESOURCE_OFFER, action::DELETED, &id, None::<&Offer>)
        .await;
    Ok(ok(()))
}
