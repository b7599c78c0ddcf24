//! Coupon application
//!
//! A coupon is resolved once at checkout by a case-insensitive lookup among
//! active codes (see `CouponRepository::find_active_by_code`); the matched
//! code and percentage are then pinned on the checkout session so later
//! catalog edits cannot change an already-applied discount.

use super::calculator::percentage_of;

/// A coupon pinned to a checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCoupon {
    /// The stored code, as the admin created it
    pub code: String,
    /// Percentage off the subtotal (1-100)
    pub discount_percentage: u32,
}

impl AppliedCoupon {
    /// Discount against a subtotal, rounded to whole EGP
    pub fn discount(&self, subtotal: i64) -> i64 {
        percentage_of(subtotal, self.discount_percentage)
    }
}
