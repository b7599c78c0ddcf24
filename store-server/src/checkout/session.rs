//! Checkout session reducer
//!
//! One [`CheckoutSession`] per storefront session, driven synchronously by
//! the checkout handlers:
//!
//! ```text
//! Editing ──submit_info / apply_coupon──▶ Reviewing ──begin_submit──▶ Submitting
//!                                            ▲                           │
//!                                            │ (retry via begin_submit)  │
//!                                          Failed ◀────────fail──────────┤
//!                                                                        ▼
//!                                                                    Completed
//! ```
//!
//! A persistence failure never loses state: the cart and the customer form
//! survive, and `begin_submit` accepts the `Failed` state so the user can
//! simply resubmit.

use thiserror::Error;

use shared::checkout::{CheckoutState, CouponStatus, CustomerInfo, OrderSummary};

use crate::core::Config;
use crate::pricing::{AppliedCoupon, build_summary};

/// Checkout transition errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("full name, address and phone number are required")]
    MissingRequiredFields,

    #[error("checkout is not ready for submission")]
    NotReadyToSubmit,

    #[error("an order submission is already in progress")]
    AlreadySubmitting,
}

/// Checkout state machine for one session
#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    state: CheckoutState,
    customer: CustomerInfo,
    coupon: Option<AppliedCoupon>,
    coupon_status: CouponStatus,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.as_ref()
    }

    pub fn coupon_status(&self) -> CouponStatus {
        self.coupon_status
    }

    /// Store the customer form and enter `Reviewing`.
    ///
    /// Requires the three mandatory fields to be non-blank. Accepted from
    /// any state except `Submitting`; submitting again after `Completed`
    /// starts the next checkout over the (already emptied) cart.
    pub fn submit_info(&mut self, customer: CustomerInfo) -> Result<(), CheckoutError> {
        if self.state == CheckoutState::Submitting {
            return Err(CheckoutError::AlreadySubmitting);
        }
        if !customer.is_complete() {
            return Err(CheckoutError::MissingRequiredFields);
        }
        self.customer = customer;
        self.state = CheckoutState::Reviewing;
        Ok(())
    }

    /// Pin a resolved coupon on the session.
    ///
    /// A successful coupon check also enters `Reviewing` when the form is
    /// already complete, mirroring the storefront flow where validating a
    /// code reveals the order summary.
    pub fn apply_coupon(&mut self, coupon: AppliedCoupon) {
        self.coupon = Some(coupon);
        self.coupon_status = CouponStatus::Valid;
        if self.state == CheckoutState::Editing && self.customer.is_complete() {
            self.state = CheckoutState::Reviewing;
        }
    }

    /// Record a failed coupon check: no discount, visible rejection
    pub fn reject_coupon(&mut self) {
        self.coupon = None;
        self.coupon_status = CouponStatus::Invalid;
    }

    /// Drop any applied coupon (the user edited the code field)
    pub fn clear_coupon(&mut self) {
        self.coupon = None;
        self.coupon_status = CouponStatus::Idle;
    }

    /// Enter `Submitting`. Accepted from `Reviewing` and, for manual
    /// retries, from `Failed`.
    pub fn begin_submit(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::Reviewing | CheckoutState::Failed => {
                self.state = CheckoutState::Submitting;
                Ok(())
            }
            CheckoutState::Submitting => Err(CheckoutError::AlreadySubmitting),
            CheckoutState::Editing | CheckoutState::Completed => {
                Err(CheckoutError::NotReadyToSubmit)
            }
        }
    }

    /// The order persisted: close out the checkout.
    ///
    /// Only meaningful after [`begin_submit`](Self::begin_submit). The
    /// coupon resets so a later checkout on the same session starts clean.
    pub fn complete(&mut self) {
        self.state = CheckoutState::Completed;
        self.coupon = None;
        self.coupon_status = CouponStatus::Idle;
    }

    /// Persistence failed: surface `Failed`, keep cart, form and coupon
    pub fn fail(&mut self) {
        self.state = CheckoutState::Failed;
    }

    /// Authoritative pricing for the current session against a subtotal
    pub fn summary(&self, subtotal: i64, config: &Config) -> OrderSummary {
        build_summary(subtotal, self.coupon.as_ref(), config)
    }
}
