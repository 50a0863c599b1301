//! Entity API integration tests
//!
//! The first half drives the envelope error contract through a server
//! whose pool points at a closed port: every store-touching route must
//! respond HTTP 200 with its handler-specific error string. The second
//! half runs CRUD round-trips against `TEST_DATABASE_URL` and skips when
//! it is unset.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

async fn expect_error(server: &axum_test::TestServer, path: &str, message: &str) {
    let response = server.get(path).await;
    assert_eq!(response.status_code(), StatusCode::OK, "route {path}");
    let body: Value = response.json();
    assert_eq!(body, json!({ "Error": message }), "route {path}");
}

#[tokio::test]
async fn test_read_routes_report_handler_specific_errors() {
    let server = common::unreachable_server();

    expect_error(&server, "/getEmployees", "Get employee error in query").await;
    expect_error(&server, "/get/1", "Get employee error in query").await;
    expect_error(&server, "/getProjects", "Get projects error in query").await;
    expect_error(&server, "/getProject/1", "Get project error in query").await;
    expect_error(&server, "/getTickets", "Get tickets error in query").await;
    expect_error(&server, "/getTicket/1", "Get ticket error in query").await;
}

#[tokio::test]
async fn test_count_routes_report_generic_query_error() {
    let server = common::unreachable_server();

    for path in [
        "/employeeCount",
        "/projectCount",
        "/ticketCount",
        "/fullTimeEmployeeCount",
        "/partTimeEmployeeCount",
        "/openProjectCount",
        "/closedProjectCount",
        "/ticketsToDoCount",
        "/ticketsInProgressCount",
    ] {
        expect_error(&server, path, "Error in running query").await;
    }
}

#[tokio::test]
async fn test_write_routes_report_handler_specific_errors() {
    let server = common::unreachable_server();

    let response = server
        .post("/createProject")
        .json(&json!({ "name": "Alpha", "desc": "test", "status": "To Do" }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "Error": "Inside project query" }));

    let response = server
        .post("/createTicket")
        .json(&json!({
            "title": "Broken build",
            "desc": "CI is red",
            "priority": "High",
            "status": "Open",
            "assignee": "Ada"
        }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "Error": "Inside ticket query" }));

    let response = server
        .put("/updateProject/3")
        .json(&json!({ "name": "Alpha", "desc": "test", "status": "To Do" }))
        .await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "Error": "Update project error in query" })
    );

    let response = server.delete("/delete/3").await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "Error": "Delete employee error in query" })
    );

    let response = server.delete("/deleteTickets/3").await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "Error": "Delete ticket error in query" })
    );
}

#[tokio::test]
async fn test_project_create_list_count_round_trip() {
    let Some(pool) = common::live_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let server = common::live_server(pool);

    let before: Value = server.get("/closedProjectCount").await.json();
    let before_count = before[0]["closeProjectCount"].as_i64().unwrap();

    let name = format!("Alpha-{}", chrono::Utc::now().timestamp_millis());
    let response = server
        .post("/createProject")
        .json(&json!({ "name": name, "desc": "test", "status": "To Do" }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "Status": "Success" }));

    // The listing includes the new row with the submitted fields verbatim
    let body: Value = server.get("/getProjects").await.json();
    assert_eq!(body["Status"], "Success");
    let created = body["Result"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["name"] == name.as_str())
        .expect("created project in listing")
        .clone();
    assert_eq!(created["desc"], "test");
    assert_eq!(created["status"], "To Do");

    // The "To Do" counter moves by one
    let after: Value = server.get("/closedProjectCount").await.json();
    assert_eq!(after[0]["closeProjectCount"].as_i64().unwrap(), before_count + 1);
}

#[tokio::test]
async fn test_project_delete_is_idempotent() {
    let Some(pool) = common::live_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let server = common::live_server(pool);

    let name = format!("Doomed-{}", chrono::Utc::now().timestamp_millis());
    server
        .post("/createProject")
        .json(&json!({ "name": name, "desc": "", "status": "To Do" }))
        .await;

    let body: Value = server.get("/getProjects").await.json();
    let id = body["Result"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["name"] == name.as_str())
        .expect("created project in listing")["id"]
        .as_i64()
        .unwrap();

    // Deleting twice succeeds both times
    let first: Value = server.delete(&format!("/deleteProjects/{id}")).await.json();
    assert_eq!(first, json!({ "Status": "Success" }));
    let second: Value = server.delete(&format!("/deleteProjects/{id}")).await.json();
    assert_eq!(second, json!({ "Status": "Success" }));
}

#[tokio::test]
async fn test_ticket_create_get_update_round_trip() {
    let Some(pool) = common::live_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let server = common::live_server(pool);

    let title = format!("Ticket-{}", chrono::Utc::now().timestamp_millis());
    let response = server
        .post("/createTicket")
        .json(&json!({
            "title": title,
            "desc": "printer on fire",
            "priority": "High",
            "status": "Open",
            "assignee": "Ada"
        }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "Status": "Success" }));

    let body: Value = server.get("/getTickets").await.json();
    let id = body["Result"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["title"] == title.as_str())
        .expect("created ticket in listing")["id"]
        .as_i64()
        .unwrap();

    // Get-by-id reflects the submitted fields verbatim
    let body: Value = server.get(&format!("/getTicket/{id}")).await.json();
    let row = &body["Result"][0];
    assert_eq!(row["desc"], "printer on fire");
    assert_eq!(row["priority"], "High");
    assert_eq!(row["assignee"], "Ada");

    // Update is a full-row overwrite
    let response = server
        .put(&format!("/updateTicket/{id}"))
        .json(&json!({
            "title": title,
            "desc": "resolved",
            "priority": "Low",
            "status": "Close",
            "assignee": "Grace"
        }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "Status": "Success" }));

    let body: Value = server.get(&format!("/getTicket/{id}")).await.json();
    let row = &body["Result"][0];
    assert_eq!(row["desc"], "resolved");
    assert_eq!(row["status"], "Close");
    assert_eq!(row["assignee"], "Grace");
}

#[tokio::test]
async fn test_employee_count_matches_listing() {
    let Some(pool) = common::live_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let server = common::live_server(pool);

    let listing: Value = server.get("/getEmployees").await.json();
    let listed = listing["Result"].as_array().unwrap().len() as i64;

    let count: Value = server.get("/employeeCount").await.json();
    assert_eq!(count[0]["employee"].as_i64().unwrap(), listed);
}

#[tokio::test]
async fn test_update_of_missing_id_succeeds_silently() {
    let Some(pool) = common::live_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let server = common::live_server(pool);

    let response = server
        .put("/updateProject/999999999")
        .json(&json!({ "name": "Ghost", "desc": "", "status": "To Do" }))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "Status": "Success" }));
}
