/**
 * Dashboard Handler
 *
 * Gated reachability check for the dashboard front-end. The session gate
 * runs before this handler, so reaching it at all means the request
 * carried a valid token; the body is a bare success envelope.
 */

use axum::response::Json;
use axum::Extension;

use crate::backend::middleware::auth::SessionUser;
use crate::shared::envelope::Envelope;

/// Dashboard handler, reachable only through the session gate.
pub async fn dashboard(Extension(user): Extension<SessionUser>) -> Json<Envelope> {
    tracing::debug!("dashboard check passed for user {}", user.user_id);
    Json(Envelope::success())
}
