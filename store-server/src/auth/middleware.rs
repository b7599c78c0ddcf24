//! Admin route guard
//!
//! Axum middleware that requires a valid admin bearer token. Applied as a
//! `route_layer` on the admin sub-router, so public storefront routes are
//! never touched by it.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{AdminUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Require an admin token on the request.
///
/// On success the [`AdminUser`] is inserted into the request extensions
/// for handlers that want the identity.
///
/// | Failure | Status |
/// |---------|--------|
/// | Missing/malformed Authorization header | 401 |
/// | Expired token | 401 |
/// | Invalid token | 401 |
/// | Valid token without the admin role | 403 |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight never carries credentials
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
        .ok_or(AppError::Unauthorized)?;

    match state.jwt_service.validate_token(token) {
        Ok(claims) if claims.role == "admin" => {
            req.extensions_mut().insert(AdminUser::from(claims));
            Ok(next.run(req).await)
        }
        Ok(claims) => {
            tracing::warn!(subject = %claims.sub, "token without admin role on admin route");
            Err(AppError::forbidden("Admin role required"))
        }
        Err(JwtError::ExpiredToken) => Err(AppError::TokenExpired),
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "admin token rejected");
            Err(AppError::InvalidToken)
        }
    }
}
