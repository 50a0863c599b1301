/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up a user row matching the submitted email and password
 * 2. Mint a JWT session token for the first match (1-day expiry)
 * 3. Attach the token as the `token` cookie
 * 4. Respond with the success envelope
 *
 * # Failure Modes
 *
 * All failures respond HTTP 200 with `Status: "Error"`:
 *
 * - no matching row -> `Wrong email or password`, no cookie set
 * - store fault -> `Error running query`; the SQL detail is logged,
 *   never sent to the client
 */

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Json, Response};
use sqlx::MySqlPool;

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::sessions::{create_token, session_cookie};
use crate::backend::auth::users::find_by_credentials;
use crate::backend::error::BackendError;
use crate::shared::envelope::Envelope;

/// Login handler
///
/// Verifies the submitted credentials against the `users` table and, on
/// success, sets the session cookie. The credential comparison happens
/// in SQL as a direct equality match.
pub async fn login(
    State(pool): State<MySqlPool>,
    Json(request): Json<LoginRequest>,
) -> Response {
    let user = match find_by_credentials(&pool, &request.email, &request.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("login credential query failed: {e}");
            return Json(Envelope::status_error("Error running query")).into_response();
        }
    };

    let Some(user) = user else {
        tracing::warn!("login rejected for {}", request.email);
        return BackendError::WrongCredentials.into_response();
    };

    let token = match create_token(user.id) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("failed to mint session token: {e}");
            return Json(Envelope::status_error("Failed to issue token")).into_response();
        }
    };

    tracing::info!("user {} logged in", user.email);

    (
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Json(Envelope::success()),
    )
        .into_response()
}
