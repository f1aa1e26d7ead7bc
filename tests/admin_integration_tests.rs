use axum::http::StatusCode;
use serde_json::json;
use userhub_shared::Role;

mod common;

#[tokio::test]
async fn test_admin_listing_without_token_returns_unauthorized() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let response = test_app.request("GET", "/admin/users", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_listing_rejects_regular_user() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let (_, token) = test_app.register("user@example.com", "Passw0rd").await;

    let response = test_app
        .request("GET", "/admin/users", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = common::body_json(response).await;
    assert_eq!(body["msg"], "Admin access required");
}

#[tokio::test]
async fn test_admin_listing_allows_admin() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let (admin_id, token) = test_app.register("admin@example.com", "Passw0rd").await;
    test_app.register("user@example.com", "Passw0rd").await;

    test_app
        .user_command
        .set_role(admin_id, Role::Admin)
        .await
        .unwrap();

    let response = test_app
        .request("GET", "/admin/users", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_admin_listing_rejects_suspended_admin() {
    let pool = common::setup_test_db().await;
    let test_app = common::create_test_app(pool).await;

    let (admin_id, token) = test_app.register("admin@example.com", "Passw0rd").await;

    test_app
        .user_command
        .set_role(admin_id.to_owned(), Role::Admin)
        .await
        .unwrap();

    // Deactivate the account; role alone is not enough for the gate
    let response = test_app
        .request(
            "PUT",
            &format!("/users/{admin_id}"),
            Some(&token),
            Some(json!({ "is_active": false })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test_app
        .request("GET", "/admin/users", Some(&token), None)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
