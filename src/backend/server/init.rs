/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: connecting the database, assembling application state, and
 * creating the router.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config;
use crate::backend::server::state::AppState;
use crate::backend::uploads::PhotoStore;

/// Create and configure the Axum application.
///
/// # Initialization Steps
///
/// 1. Connect the MySQL pool and run migrations
/// 2. Create the photo store rooted at the configured upload directory
/// 3. Assemble `AppState` and build the router
///
/// # Errors
///
/// Returns the sqlx error when the database is unreachable or a
/// migration fails. The server cannot serve anything useful without its
/// store, so startup aborts.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing StaffDesk backend server");

    let db_pool = config::connect_database().await?;
    let photos = PhotoStore::new(config::upload_root());

    let app_state = AppState { db_pool, photos };
    Ok(create_router(app_state))
}
