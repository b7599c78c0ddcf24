//! Shared types for the store platform
//!
//! Domain types used by the server and by any client that speaks its wire
//! format:
//!
//! - **Cart** (`cart`): the session cart ledger and its line items
//! - **Checkout** (`checkout`): customer info, pricing summary, checkout state
//! - **Order** (`order`): order status lifecycle
//! - **Sync** (`sync`): real-time sync feed payloads

pub mod cart;
pub mod checkout;
pub mod order;
pub mod sync;

// Re-exports
pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutState, CouponStatus, CustomerInfo, OrderSummary};
pub use order::OrderStatus;
pub use sync::SyncPayload;
