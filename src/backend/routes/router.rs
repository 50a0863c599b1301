/**
 * Router Configuration
 *
 * This module provides the main router creation function combining all
 * route configurations into a single Axum router.
 *
 * # Route Order
 *
 * API routes are registered first; anything they do not match falls
 * through to the static file service, which serves assets from the
 * public directory and hands every other GET the single-page-app entry
 * file.
 *
 * # Gating
 *
 * Only `/dashboard` sits behind the session gate; the CRUD routes are
 * open, matching the wire contract the dashboard front-end was built
 * against.
 */

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::auth::handlers::{dashboard, login, logout};
use crate::backend::middleware::auth::verify_session;
use crate::backend::server::state::AppState;
use crate::backend::{employees, projects, tickets};

/// Directory served for static assets (uploaded photos included)
const STATIC_DIR: &str = "public";

/// Single-page-app entry file served for unmatched GETs
const SPA_INDEX: &str = "build/index.html";

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new()
        // Authentication
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route(
            "/dashboard",
            get(dashboard).layer(axum::middleware::from_fn(verify_session)),
        )
        // Employee CRUD
        .route("/getEmployees", get(employees::list_employees))
        .route("/get/{id}", get(employees::get_employee))
        .route("/create", post(employees::create_employee))
        .route("/update/{id}", put(employees::update_employee))
        .route("/delete/{id}", delete(employees::delete_employee))
        // Project CRUD
        .route("/getProjects", get(projects::list_projects))
        .route("/getProject/{id}", get(projects::get_project))
        .route("/createProject", post(projects::create_project))
        .route("/updateProject/{id}", put(projects::update_project))
        .route("/deleteProjects/{id}", delete(projects::delete_project))
        // Ticket CRUD
        .route("/getTickets", get(tickets::list_tickets))
        .route("/getTicket/{id}", get(tickets::get_ticket))
        .route("/createTicket", post(tickets::create_ticket))
        .route("/updateTicket/{id}", put(tickets::update_ticket))
        .route("/deleteTickets/{id}", delete(tickets::delete_ticket))
        // Dashboard counters
        .route("/employeeCount", get(employees::employee_count))
        .route("/projectCount", get(projects::project_count))
        .route("/ticketCount", get(tickets::ticket_count))
        .route("/fullTimeEmployeeCount", get(employees::full_time_count))
        .route("/partTimeEmployeeCount", get(employees::part_time_count))
        .route("/openProjectCount", get(projects::open_project_count))
        .route("/closedProjectCount", get(projects::closed_project_count))
        .route("/ticketsToDoCount", get(tickets::tickets_open_count))
        .route("/ticketsInProgressCount", get(tickets::tickets_closed_count));

    // Static assets; unmatched GETs fall through to the SPA entry file
    let router =
        router.fallback_service(ServeDir::new(STATIC_DIR).not_found_service(ServeFile::new(SPA_INDEX)));

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}

/// CORS policy for the dashboard dev server.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
