use std::sync::Arc;

use dashmap::DashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::sync::SyncPayload;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::SyncFeed;
use crate::sessions::SessionStore;

/// Per-resource version counters
///
/// Lock-free map of resource name → monotonically increasing version,
/// used by [`ServerState::broadcast_sync`] so clients can order
/// notifications and detect gaps.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the version for a resource and return the new value.
    /// Unknown resources start at 0, so the first increment returns 1.
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version for a resource (0 if never incremented)
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Shared server state — one instance cloned into every handler
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | Embedded document database |
/// | sessions | In-memory cart + checkout sessions |
/// | feed | Real-time sync feed (socket.io) |
/// | jwt_service | Admin token issuing/validation |
/// | resource_versions | Version counters for sync broadcasts |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub sessions: SessionStore,
    pub feed: SyncFeed,
    pub jwt_service: Arc<JwtService>,
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    /// Initialize state against the on-disk database under
    /// `config.work_dir/database`.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db = DbService::connect(&config.work_dir).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// Build state around an existing database handle.
    ///
    /// Tests use this with the in-memory engine.
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            sessions: SessionStore::new(),
            feed: SyncFeed::new(),
            jwt_service,
            resource_versions: Arc::new(ResourceVersions::new()),
        }
    }

    /// Broadcast a change notification on the sync feed.
    ///
    /// Versions increment per resource; delivery is best-effort and never
    /// fails the calling operation.
    pub async fn broadcast_sync<T: serde::Serialize>(
        &self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
    ) {
        let version = self.resource_versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        self.feed.publish(&payload).await;
    }
}
