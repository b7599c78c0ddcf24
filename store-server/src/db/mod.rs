//! Database Module
//!
//! Embedded SurrealDB document store. The service runs on the RocksDB
//! engine under `work_dir/database`; tests run on the in-memory engine.

pub mod models;
pub mod repository;
pub mod seed;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "store";
const DATABASE: &str = "store";

/// Database service — connection factory for the embedded document store
pub struct DbService;

impl DbService {
    /// Open (or create) the on-disk database under `work_dir/database`
    pub async fn connect(work_dir: &str) -> Result<Surreal<Db>, AppError> {
        let path = format!("{work_dir}/database");
        let db = Surreal::new::<RocksDb>(path.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!("Database ready at {path}");
        Ok(db)
    }

    /// Open a fresh in-memory database (tests)
    pub async fn connect_memory() -> Result<Surreal<Db>, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;
        Ok(db)
    }
}
