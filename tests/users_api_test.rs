//! User API integration tests
//!
//! Exercises registration, login, and logout through the real router over
//! an in-memory database.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::database::TestDatabase;
use postly::server::create_app;

fn create_test_server(db: &TestDatabase) -> TestServer {
    let app = create_app(db.pool().clone());
    TestServer::new(app).unwrap()
}

async fn register_user(server: &TestServer, username: &str, email: &str, password: &str) {
    let response = server
        .post("/api/v1/users/register")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_success() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/v1/users/register")
        .json(&serde_json::json!({
            "username": "hassan",
            "email": "Hassan@Mail.com",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User registered successfully!");
    assert_eq!(body["user"]["username"], "hassan");
    assert_eq!(body["user"]["email"], "hassan@mail.com");
    assert!(body["user"]["id"].is_string());

    // The sanitized view never carries password material.
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_stores_normalized_email() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    register_user(&server, "hassan", "Hassan@Mail.com", "secret1").await;

    let stored: String = sqlx::query_scalar("SELECT email FROM users WHERE username = 'hassan'")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(stored, "hassan@mail.com");
}

#[tokio::test]
async fn test_register_duplicate_email_any_casing() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    register_user(&server, "hassan", "Hassan@Mail.com", "secret1").await;

    let response = server
        .post("/api/v1/users/register")
        .json(&serde_json::json!({
            "username": "someoneelse",
            "email": "hassan@MAIL.com",
            "password": "secret2",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User already exists!");
    assert_eq!(db.count("users").await, 1);
}

#[tokio::test]
async fn test_register_missing_fields_creates_nothing() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let bodies = [
        serde_json::json!({"email": "a@b.com", "password": "secret1"}),
        serde_json::json!({"username": "hassan", "password": "secret1"}),
        serde_json::json!({"username": "hassan", "email": "a@b.com"}),
        serde_json::json!({"username": "", "email": "a@b.com", "password": "secret1"}),
    ];

    for body in bodies {
        let response = server.post("/api/v1/users/register").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = response.json();
        assert_eq!(json["error"], "All fields are required");
    }

    assert_eq!(db.count("users").await, 0);
}

#[tokio::test]
async fn test_login_success_case_insensitive() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    register_user(&server, "hassan", "User@x.com", "secret1").await;

    let response = server
        .post("/api/v1/users/login")
        .json(&serde_json::json!({
            "email": "user@x.com",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["email"], "user@x.com");
    assert_eq!(body["username"], "hassan");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    register_user(&server, "hassan", "hassan@mail.com", "secret1").await;

    let response = server
        .post("/api/v1/users/login")
        .json(&serde_json::json!({
            "email": "hassan@mail.com",
            "password": "wrongpassword",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/v1/users/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_logout_success() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    register_user(&server, "hassan", "hassan@mail.com", "secret1").await;

    let response = server
        .post("/api/v1/users/logout")
        .json(&serde_json::json!({"email": "Hassan@Mail.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User logged out successfully!");
}

#[tokio::test]
async fn test_logout_unknown_email() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/v1/users/logout")
        .json(&serde_json::json!({"email": "nobody@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/api/v1/users/profile").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not found");
}
