/**
 * Session Gate Middleware
 *
 * Protects routes that require an authenticated session. The gate:
 *
 * 1. Extracts the `token` cookie from the `Cookie` header
 * 2. Verifies the JWT signature and expiry
 * 3. Attaches the session's user id to request extensions
 *
 * Rejections render as HTTP 200 envelope bodies:
 *
 * - no token cookie -> `{"Error": "You are not authorized"}`
 * - invalid or expired token -> `{"Error": "Wrong token"}`
 */

use axum::extract::Request;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::Response;

use crate::backend::auth::sessions::{token_from_cookie_header, verify_token};
use crate::backend::error::BackendError;

/// Session data extracted from a verified token, available to gated
/// handlers through request extensions.
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub user_id: i32,
}

/// Session gate middleware
pub async fn verify_session(mut request: Request, next: Next) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(token_from_cookie_header)
        .ok_or_else(|| {
            tracing::warn!("request without session token rejected");
            BackendError::Unauthorized("You are not authorized")
        })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("session token rejected: {e}");
        BackendError::Unauthorized("Wrong token")
    })?;

    request
        .extensions_mut()
        .insert(SessionUser { user_id: claims.id });

    Ok(next.run(request).await)
}
