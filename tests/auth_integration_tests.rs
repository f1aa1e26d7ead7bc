use axum::http::StatusCode;
use serde_json::json;
use sqlx::Row;

mod common;

#[tokio::test]
async fn test_register_with_valid_inputs_creates_user() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool.clone()).await;

    let response = test_app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "test@example.com", "password": "Passw0rd" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = common::body_json(response).await;
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "test@example.com");
    assert_eq!(body["user"]["role"], "user");
    assert_eq!(body["user"]["is_active"], true);
    assert!(body["user"].get("password").is_none());

    // Verify the stored credential is a hash, not the plaintext
    let row = sqlx::query("SELECT password FROM user WHERE email = 'test@example.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    let stored: String = row.get("password");
    assert_ne!(stored, "Passw0rd");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn test_register_with_duplicate_email_returns_error() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    test_app.register("test@example.com", "Passw0rd").await;

    let response = test_app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "test@example.com", "password": "0therPassw0rd" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Email already in use");
}

#[tokio::test]
async fn test_register_with_weak_password_returns_first_failing_rule() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    // Too short (also lacks uppercase - length is reported first)
    let response = test_app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "a@example.com", "password": "abc123" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Password must be at least 8 characters long");

    // No uppercase letter
    let response = test_app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "a@example.com", "password": "abcdefg1" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(
        body["msg"],
        "Password must contain at least one uppercase letter"
    );

    // No digit
    let response = test_app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "a@example.com", "password": "ABCDEFGH" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Password must contain at least one digit");
}

#[tokio::test]
async fn test_register_with_invalid_email_returns_error() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "user@@example", "password": "Passw0rd" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_with_missing_fields_returns_error() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app
        .request("POST", "/register", None, Some(json!({})))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Email and password are required");
}

#[tokio::test]
async fn test_register_then_login_resolves_same_user() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let (user_id, _) = test_app.register("test@example.com", "Passw0rd").await;

    let response = test_app
        .request(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "test@example.com", "password": "Passw0rd" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["user"]["id"], user_id.as_str());

    // The issued token resolves back to the same identity
    let token = body["access_token"].as_str().unwrap().to_string();
    let profile = test_app.request("GET", "/profile", Some(&token), None).await;
    assert_eq!(profile.status(), StatusCode::OK);

    let profile_body = common::body_json(profile).await;
    assert_eq!(profile_body["user"]["id"], user_id.as_str());
}

#[tokio::test]
async fn test_login_with_wrong_password_returns_unauthorized() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    test_app.register("test@example.com", "Passw0rd").await;

    let response = test_app
        .request(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "test@example.com", "password": "WrongPassw0rd" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_with_unknown_email_returns_unauthorized() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app
        .request(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "Passw0rd" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_missing_fields_returns_error() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app
        .request(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "test@example.com" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Email and password are required");
}

#[tokio::test]
async fn test_profile_without_token_returns_unauthorized() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app.request("GET", "/profile", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Missing or invalid authorization token");
}

#[tokio::test]
async fn test_profile_with_garbage_token_returns_unauthorized() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app
        .request("GET", "/profile", Some("not.a.token"), None)
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_token_signed_by_other_secret_returns_unauthorized() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let (user_id, _) = test_app.register("test@example.com", "Passw0rd").await;

    let forged = userhub_user::generate_jwt(
        user_id,
        "test@example.com".to_string(),
        "admin".to_string(),
        "another_secret_that_is_long_enough_123456",
        3600,
    )
    .unwrap();

    let response = test_app.request("GET", "/profile", Some(&forged), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
