//! Store Server - bilingual supplements storefront backend
//!
//! # Architecture overview
//!
//! - **Catalog, offers, coupons, orders** (`db`): embedded SurrealDB
//!   collections behind per-collection repositories
//! - **Sessions** (`sessions`): in-memory cart + checkout state, one per
//!   storefront visitor
//! - **Pricing** (`pricing`): offer bundles, coupon discounts, delivery
//!   fee and order totals
//! - **Checkout** (`checkout`): the per-session checkout state machine
//! - **HTTP API** (`api`): public storefront routes plus a JWT-guarded
//!   admin back-office
//! - **Sync feed** (`services`): socket.io change notifications for live
//!   admin views
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── auth/          # admin JWT auth
//! ├── checkout/      # checkout state machine
//! ├── db/            # models and repositories
//! ├── pricing/       # money math
//! ├── services/      # sync feed
//! ├── sessions/      # in-memory session store
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod checkout;
pub mod core;
pub mod db;
pub mod pricing;
pub mod services;
pub mod sessions;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
