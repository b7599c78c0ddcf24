//! Order Model
//!
//! Orders are written once at checkout with a full snapshot of the cart
//! lines and the pricing breakdown. After creation only `status` (and the
//! accompanying `updated_at`) ever changes; items and pricing are immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::cart::CartLine;
use shared::checkout::{CustomerInfo, OrderSummary};
use shared::order::OrderStatus;

use super::serde_helpers;

/// Placed order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Cart snapshot at placement time
    pub items: Vec<CartLine>,
    pub customer: CustomerInfo,
    pub summary: OrderSummary,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create order payload (status starts at pending)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<CartLine>,
    pub customer: CustomerInfo,
    pub summary: OrderSummary,
}
