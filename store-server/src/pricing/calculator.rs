//! Checkout totals
//!
//! Combines the cart subtotal, the delivery-fee rule and an optional coupon
//! into the immutable [`OrderSummary`] stored on the order.
//!
//! The delivery fee is waived only when the subtotal strictly exceeds the
//! free-shipping threshold; a subtotal exactly at the threshold still pays
//! the flat fee. The cart preview endpoint deliberately ignores the
//! threshold and always shows the flat fee; the checkout value computed
//! here is the authoritative one.

use rust_decimal::prelude::*;

use shared::checkout::OrderSummary;

use super::coupon::AppliedCoupon;
use crate::core::Config;

/// Percentage of an amount, rounded half-away-from-zero to whole EGP
pub fn percentage_of(amount: i64, percentage: u32) -> i64 {
    let fraction = Decimal::from(amount) * Decimal::from(percentage) / Decimal::ONE_HUNDRED;
    fraction
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Delivery fee for a subtotal: free above the threshold, flat fee otherwise
pub fn delivery_fee(subtotal: i64, config: &Config) -> i64 {
    if subtotal > config.free_shipping_threshold {
        0
    } else {
        config.delivery_fee
    }
}

/// Assemble the order summary
///
/// `total_cost = subtotal + delivery_fee - coupon_discount`
pub fn build_summary(subtotal: i64, coupon: Option<&AppliedCoupon>, config: &Config) -> OrderSummary {
    let delivery_fee = delivery_fee(subtotal, config);
    let coupon_discount = coupon.map(|c| c.discount(subtotal)).unwrap_or(0);
    OrderSummary {
        subtotal,
        delivery_fee,
        coupon_discount,
        total_cost: subtotal + delivery_fee - coupon_discount,
        coupon_code: coupon.map(|c| c.code.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::from_env();
        config.delivery_fee = 85;
        config.free_shipping_threshold = 2500;
        config
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage_of(1000, 15), 150);
        assert_eq!(percentage_of(300, 10), 30);
        // 333 * 15% = 49.95 -> 50; 330 * 15% = 49.5 -> 50
        assert_eq!(percentage_of(333, 15), 50);
        assert_eq!(percentage_of(330, 15), 50);
        assert_eq!(percentage_of(0, 50), 0);
    }

    #[test]
    fn fee_waived_strictly_above_threshold() {
        let config = test_config();
        assert_eq!(delivery_fee(2000, &config), 85);
        assert_eq!(delivery_fee(2500, &config), 85);
        assert_eq!(delivery_fee(2501, &config), 0);
        assert_eq!(delivery_fee(2600, &config), 0);
    }

    #[test]
    fn summary_without_coupon() {
        let config = test_config();
        let summary = build_summary(2000, None, &config);
        assert_eq!(summary.delivery_fee, 85);
        assert_eq!(summary.coupon_discount, 0);
        assert_eq!(summary.total_cost, 2085);
        assert!(summary.coupon_code.is_none());

        let summary = build_summary(2600, None, &config);
        assert_eq!(summary.delivery_fee, 0);
        assert_eq!(summary.total_cost, 2600);
    }

    #[test]
    fn summary_with_coupon() {
        let config = test_config();
        let coupon = AppliedCoupon {
            code: "SAVE15".into(),
            discount_percentage: 15,
        };
        let summary = build_summary(1000, Some(&coupon), &config);
        assert_eq!(summary.coupon_discount, 150);
        assert_eq!(summary.total_cost, 1000 + 85 - 150);
        assert_eq!(summary.coupon_code.as_deref(), Some("SAVE15"));
    }
}
