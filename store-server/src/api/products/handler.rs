//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::sync::action;

use crate::api::convert::record_id_string;
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};

const RESOURCE_PRODUCT: &str = "product";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// GET /api/products - full catalog, or one category via `?category=`
///
/// The storefront sends `category=allProducts` for the unfiltered view.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = match query.category.as_deref() {
        None | Some("allProducts") => repo.find_all().await?,
        Some(category) => repo.find_by_category(category).await?,
    };
    Ok(ok(products))
}

/// GET /api/products/offers - catalog items flagged as discounted
pub async fn list_offer_products(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let repo = ProductRepository::new(state.db.clone());
    Ok(ok(repo.find_offer_products().await?))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(ok(product))
}

/// POST /api/products (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ProductCreate>,
) -> AppResult<Json<AppResponse<Product>>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.name_ar, "name_ar", MAX_NAME_LEN)?;
    validate_required_text(&data.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.description_ar, "description_ar", MAX_DESCRIPTION_LEN)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(data).await?;

    let id = record_id_string(&product.id);
    state
        .broadcast_sync(RESOURCE_PRODUCT, action::CREATED, &id, Some(&product))
        .await;
    Ok(ok(product))
}

/// PUT /api/products/:id (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<ProductUpdate>,
) -> AppResult<Json<AppResponse<Product>>> {
    validate_optional_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&data.name_ar, "name_ar", MAX_NAME_LEN)?;
    validate_optional_text(&data.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.description_ar, "description_ar", MAX_DESCRIPTION_LEN)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update(&id, data).await?;

    let id = record_id_string(&product.id);
    state
        .broadcast_sync(RESOURCE_PRODUCT, action::UPDATED, &id, Some(&product))
        .await;
    Ok(ok(product))
}

/// DELETE /api/products/:id (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = ProductRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;

    repo.delete(&id).await?;

    let id = record_id_string(&existing.id);
    state
        .broadcast_sync(RESOURCE_PRODUCT, action::DELETED, &id, None::<&Product>)
        .await;
    Ok(ok(()))
}
