//! Checkout flow
//!
//! The per-session checkout state machine. Value types (state enum,
//! customer form, order summary) live in `shared::checkout`; the
//! transition logic lives here in [`CheckoutSession`].

pub mod session;

pub use session::{CheckoutError, CheckoutSession};
