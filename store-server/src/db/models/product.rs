//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Catalog product entity
///
/// Bilingual fields carry the English value in `name`/`description` and the
/// Arabic value in the `_ar` counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub name_ar: String,
    /// Unit price in whole EGP
    pub price: i64,
    /// Category key (e.g. "protein", "creatine", "massGainer")
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_ar: String,
    /// Ordered flavor names; empty when the product has no flavor choice
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Catalog item sold at a discount (shows struck-through original price)
    #[serde(default)]
    pub is_offer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub name_ar: String,
    pub price: i64,
    pub category: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub flavors: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    pub is_offer: Option<bool>,
    pub original_price: Option<i64>,
    pub discount_percentage: Option<u32>,
}

/// Update product payload — only provided fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub flavors: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    pub is_offer: Option<bool>,
    pub original_price: Option<i64>,
    pub discount_percentage: Option<u32>,
}
