//! Auth handlers
//!
//! Admin login against the configured credentials. There is exactly one
//! back-office identity (email + Argon2 password hash from the
//! environment); a successful login returns a bearer token for the admin
//! routes.

use std::time::Duration;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Fixed delay for authentication to blunt timing probes
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// POST /api/auth/login
///
/// Every failure path returns the same unified error so neither the admin
/// email nor whether login is configured can be probed.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(password_hash) = state.config.admin_password_hash.as_deref() else {
        tracing::warn!("Login attempted but ADMIN_PASSWORD_HASH is not configured");
        return Err(AppError::invalid_credentials());
    };

    if !req.email.trim().eq_ignore_ascii_case(&state.config.admin_email) {
        tracing::warn!("Login failed - unknown email");
        return Err(AppError::invalid_credentials());
    }

    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AppError::internal(format!("Invalid ADMIN_PASSWORD_HASH: {e}")))?;
    if Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        tracing::warn!(email = %state.config.admin_email, "Login failed - wrong password");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_admin_token(&state.config.admin_email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %state.config.admin_email, "Admin logged in");

    Ok(ok(LoginResponse {
        token,
        email: state.config.admin_email.clone(),
        expires_in: state.jwt_service.expires_in_seconds(),
    }))
}
