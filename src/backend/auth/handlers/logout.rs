/**
 * Logout Handler
 *
 * Clears the `token` cookie. Session tokens are stateless, so there is
 * nothing to invalidate server-side; a copied token stays valid until
 * its natural expiry.
 */

use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Json};

use crate::backend::auth::sessions::clear_session_cookie;
use crate::shared::envelope::Envelope;

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(Envelope::success()),
    )
}
