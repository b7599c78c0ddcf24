//! Admin authentication
//!
//! The storefront itself is anonymous; only the back-office is gated.
//! Login checks the configured admin credentials (Argon2 hash) and issues
//! a short-lived JWT; [`middleware::require_admin`] guards the admin
//! routes and rejects anything without a valid admin bearer token.

pub mod jwt;
pub mod middleware;

pub use jwt::{AdminUser, Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_admin;
