//! Repository Module
//!
//! CRUD operations for the document store collections.
//!
//! # Id convention
//!
//! Ids travel as `"table:id"` strings through the whole stack. Repositories
//! accept either the full form or the bare key and normalize via
//! [`make_record_id`].

// Catalog
pub mod product;

// Promotions
pub mod coupon;
pub mod offer;

// Orders
pub mod order;

// Re-exports
pub use coupon::CouponRepository;
pub use offer::OfferRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Build a record id from either a bare key or a full `"table:id"` string
pub fn make_record_id(table: &str, id: &str) -> RecordId {
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
