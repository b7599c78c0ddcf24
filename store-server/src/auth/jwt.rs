//! JWT token service
//!
//! Issues and validates the bearer tokens that gate the admin API.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT settings
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | JWT_SECRET | (generated) | Signing key, at least 32 characters |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
/// | JWT_ISSUER | store-server | `iss` claim |
/// | JWT_AUDIENCE | store-admin | `aud` claim |
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// Load JWT settings from the environment.
    ///
    /// Without `JWT_SECRET` a random per-process secret is generated: fine
    /// for development, but every restart invalidates all admin sessions,
    /// so production deployments should always set it.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if secret.len() >= 32 => secret,
            Ok(_) => {
                tracing::warn!("JWT_SECRET is shorter than 32 characters, generating one instead");
                generated_secret()
            }
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, admin sessions will not survive restarts");
                generated_secret()
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1440),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "store-server".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "store-admin".into()),
        }
    }
}

fn generated_secret() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Claims carried in an admin token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin email (subject)
    pub sub: String,
    /// Role; always "admin" for tokens issued here
    pub role: String,
    /// Unique token id
    pub jti: String,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,

    #[error("token generation failed: {0}")]
    GenerationFailed(String),
}

/// Token issuing and validation
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Lifetime of newly issued tokens, in seconds
    pub fn expires_in_seconds(&self) -> i64 {
        self.config.expiration_minutes * 60
    }

    /// Issue an admin token for the given email
    pub fn generate_admin_token(&self, email: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            role: "admin".to_string(),
            jti: Uuid::new_v4().to_string(),
            exp: (now + Duration::minutes(self.config.expiration_minutes)).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;
        Ok(data.claims)
    }

    /// Extract the token from an `Authorization: Bearer <token>` header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// The authenticated admin, injected into request extensions by
/// [`require_admin`](super::middleware::require_admin)
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

impl From<Claims> for AdminUser {
    fn from(claims: Claims) -> Self {
        Self { email: claims.sub }
    }
}
