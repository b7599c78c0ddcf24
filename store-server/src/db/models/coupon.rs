//! Coupon Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Checkout coupon entity
///
/// Codes are matched case-insensitively and the discount applies to the cart
/// subtotal at checkout, never per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub code: String,
    /// Percentage off the subtotal (1-100)
    pub discount_percentage: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Create coupon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCreate {
    pub code: String,
    pub discount_percentage: u32,
    pub is_active: Option<bool>,
}

/// Update coupon payload — only provided fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub code: Option<String>,
    pub discount_percentage: Option<u32>,
    pub is_active: Option<bool>,
}
