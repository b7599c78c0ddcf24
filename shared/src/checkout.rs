//! Checkout value types
//!
//! Serializable pieces of a checkout session: the customer form, the pricing
//! summary, coupon status, and the session state. The transition logic lives
//! in the server's checkout module.

use serde::{Deserialize, Serialize};

/// Customer information collected on the checkout form.
///
/// `payment_method` is a display label only (`cod`, `vodafone`, `instapay`
/// by convention) — no transaction processing happens behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub payment_method: String,
}

impl CustomerInfo {
    /// All required fields present (non-blank)
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.phone_number.trim().is_empty()
    }
}

/// Immutable pricing breakdown of an order, all amounts in whole EGP.
///
/// `total_cost = subtotal + delivery_fee - coupon_discount`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub coupon_discount: i64,
    pub total_cost: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

/// Outcome of the last coupon check on a checkout session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    /// No code checked yet (or the code field was edited since)
    #[default]
    Idle,
    /// Code matched an active coupon; its discount applies
    Valid,
    /// Code unknown or inactive; no discount applies
    Invalid,
}

/// Checkout session state.
///
/// Editing → Reviewing → Submitting → Completed, with Failed as a transient
/// stop after a persistence error: the cart and form survive and the order
/// can be resubmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutState {
    #[default]
    Editing,
    Reviewing,
    Submitting,
    Completed,
    Failed,
}
