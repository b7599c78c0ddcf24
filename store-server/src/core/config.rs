use crate::auth::JwtConfig;

/// Server configuration
///
/// Every setting can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment name |
/// | DELIVERY_FEE | 85 | Flat delivery fee in EGP |
/// | FREE_SHIPPING_THRESHOLD | 2500 | Subtotal above which delivery is free |
/// | ADMIN_EMAIL | admin@store.local | Back-office login email |
/// | ADMIN_PASSWORD_HASH | (unset) | Argon2 PHC hash; login disabled if unset |
/// | SEED_SAMPLE_DATA | false | Insert the sample catalog when empty |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/store HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the embedded database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT settings for admin sessions
    pub jwt: JwtConfig,

    // === Pricing ===
    /// Flat delivery fee in whole EGP
    pub delivery_fee: i64,
    /// Subtotal (exclusive) above which delivery is free
    pub free_shipping_threshold: i64,

    // === Back-office ===
    /// Admin login email
    pub admin_email: String,
    /// Argon2 PHC-format hash of the admin password; `None` disables login
    pub admin_password_hash: Option<String>,

    /// Seed the sample catalog on startup when the product collection is empty
    pub seed_sample_data: bool,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::from_env(),
            delivery_fee: std::env::var("DELIVERY_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(85),
            free_shipping_threshold: std::env::var("FREE_SHIPPING_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2500),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@store.local".into()),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH").ok(),
            seed_sample_data: std::env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the work dir and port on top of env config.
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
