//! Offer Model
//!
//! An offer is an admin-defined bundle of catalog products sold together at
//! a percentage discount. Adding one to a cart materializes it into a
//! synthetic cart line; the bundle pricing rules live in the pricing module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Offer bundle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub title: String,
    pub title_ar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_ar: String,
    /// Percentage off the summed bundle price (0-100)
    pub discount_percentage: u32,
    /// Ids of the bundled catalog products
    #[serde(default)]
    pub product_ids: Vec<String>,
    /// Flat bundle price in EGP; overrides the computed price when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub valid_until: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Offer {
    /// Active and not yet expired at `now`
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.valid_until > now
    }
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferCreate {
    pub title: String,
    pub title_ar: String,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub discount_percentage: u32,
    pub product_ids: Option<Vec<String>>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub valid_until: DateTime<Utc>,
}

/// Update offer payload — only provided fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferUpdate {
    pub title: Option<String>,
    pub title_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub discount_percentage: Option<u32>,
    pub product_ids: Option<Vec<String>>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub valid_until: Option<DateTime<Utc>>,
}
