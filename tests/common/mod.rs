#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

use userhub::config::{Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig};
use userhub::routes::AppState;

pub const TEST_JWT_SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    let migrator = userhub_db::migrator().unwrap();
    let mut conn = pool.acquire().await.unwrap();
    migrator.run(&mut *conn, &Plan::apply_all()).await.unwrap();
    drop(conn);

    pool
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub user_command: userhub_user::Command,
}

pub async fn create_test_app(pool: SqlitePool) -> TestApp {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiration_days: 7,
        },
        observability: ObservabilityConfig::default(),
    };

    let user_command = userhub_user::Command::new(pool.clone());

    let state = AppState {
        config,
        user_command: user_command.clone(),
        pool: pool.clone(),
    };

    TestApp {
        router: userhub::create_router(state),
        pool,
        user_command,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Register a user and return (user_id, access_token)
    pub async fn register(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/register",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;

        (
            body["user"]["id"].as_str().unwrap().to_string(),
            body["access_token"].as_str().unwrap().to_string(),
        )
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}
