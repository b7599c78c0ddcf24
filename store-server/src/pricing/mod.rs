//! Pricing engine
//!
//! All the money math of the storefront, separated from the HTTP layer:
//!
//! - [`calculator`] - delivery fee rule and order summary assembly
//! - [`bundle`] - offer bundle pricing and cart-line materialization
//! - [`coupon`] - checkout coupon application
//!
//! Amounts are whole EGP (`i64`). Percentage math goes through
//! `rust_decimal` with explicit half-away-from-zero rounding so discounts
//! land on the same integers the storefront displays.

pub mod bundle;
pub mod calculator;
pub mod coupon;

pub use bundle::{bundle_price, materialize_offer};
pub use calculator::{build_summary, delivery_fee, percentage_of};
pub use coupon::AppliedCoupon;
