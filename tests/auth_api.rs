//! Authentication API integration tests
//!
//! Exercises the session gate, logout, and the login failure contract.
//! None of these tests need a live database: the gate and logout never
//! touch the store, and the login store-fault path is driven through a
//! pool pointing at a closed port.

mod common;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use serde_json::{json, Value};
use staffdesk::backend::auth::sessions::create_token;

#[tokio::test]
async fn test_dashboard_without_cookie_is_rejected() {
    let server = common::unreachable_server();

    let response = server.get("/dashboard").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "Error": "You are not authorized" }));
}

#[tokio::test]
async fn test_dashboard_with_garbage_token_is_rejected() {
    let server = common::unreachable_server();

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("token=not-a-jwt"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "Error": "Wrong token" }));
}

#[tokio::test]
async fn test_dashboard_with_valid_token_succeeds() {
    let server = common::unreachable_server();
    let token = create_token(1).unwrap();

    let response = server
        .get("/dashboard")
        .add_header(
            COOKIE,
            HeaderValue::from_str(&format!("token={token}")).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "Status": "Success" }));
}

#[tokio::test]
async fn test_dashboard_finds_token_among_other_cookies() {
    let server = common::unreachable_server();
    let token = create_token(7).unwrap();

    let response = server
        .get("/dashboard")
        .add_header(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; token={token}; lang=en")).unwrap(),
        )
        .await;

    let body: Value = response.json();
    assert_eq!(body, json!({ "Status": "Success" }));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = common::unreachable_server();

    let response = server.get("/logout").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "Status": "Success" }));

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("logout sets a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token=;"));
    assert!(set_cookie.contains("Expires="));
}

#[tokio::test]
async fn test_login_store_fault_reports_query_error() {
    let server = common::unreachable_server();

    let response = server
        .post("/login")
        .json(&json!({ "email": "admin@example.com", "password": "secret" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "Status": "Error", "Error": "Error running query" })
    );
    // No cookie on failure
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_round_trip_with_live_store() {
    let Some(pool) = common::live_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let email = format!("user-{}@example.com", chrono::Utc::now().timestamp_millis());
    sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
        .bind(&email)
        .bind("secret")
        .execute(&pool)
        .await
        .unwrap();

    let server = common::live_server(pool);

    // Matching credentials set the session cookie
    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": "secret" }))
        .await;
    let body: Value = response.json();
    assert_eq!(body, json!({ "Status": "Success" }));
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login sets a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));

    // A wrong password yields the credentials error and no cookie
    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": "wrong" }))
        .await;
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "Status": "Error", "Error": "Wrong email or password" })
    );
    assert!(response.headers().get(SET_COOKIE).is_none());
}
