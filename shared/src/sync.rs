//! Sync feed payloads
//!
//! When a resource changes (an admin edit, a placed order), the server
//! broadcasts a [`SyncPayload`] to every connected client. Clients replace
//! their local list wholesale on each notification; the per-resource version
//! lets them detect missed updates and refetch.

use serde::{Deserialize, Serialize};

/// Sync actions emitted by the server
pub mod action {
    pub const CREATED: &str = "created";
    pub const UPDATED: &str = "updated";
    pub const DELETED: &str = "deleted";
}

/// One change notification on the sync feed
///
/// # Example
/// - `resource`: "order"
/// - `version`: 42
/// - `action`: "created"
/// - `id`: "order:h1k2j3"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Resource type ("product", "offer", "coupon", "order")
    pub resource: String,
    /// Monotonically increasing per-resource version
    pub version: u64,
    /// Change kind ("created", "updated", "deleted")
    pub action: String,
    /// Id of the changed record
    pub id: String,
    /// Full record after the change; absent on delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
