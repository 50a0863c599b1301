/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # State Contents
 *
 * - `db_pool` - the process-wide MySQL connection pool; every handler
 *   runs its single statement against this pool
 * - `photos` - the disk-backed photo store used by employee creation
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they need (`State<MySqlPool>` for most handlers) without
 * taking the entire `AppState`.
 */

use axum::extract::FromRef;
use sqlx::MySqlPool;

use crate::backend::uploads::PhotoStore;

/// Application state shared across all request handlers.
///
/// Both fields are cheap to clone: the pool is an `Arc` internally and
/// the photo store holds only its root path.
#[derive(Clone)]
pub struct AppState {
    /// MySQL connection pool, shared process-wide
    pub db_pool: MySqlPool,
    /// Disk-backed store for uploaded employee photos
    pub photos: PhotoStore,
}

/// Allow handlers to extract `State<MySqlPool>` directly.
impl FromRef<AppState> for MySqlPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract `State<PhotoStore>` directly.
impl FromRef<AppState> for PhotoStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.photos.clone()
    }
}
