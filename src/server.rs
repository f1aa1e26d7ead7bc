//! Router assembly and serve loop

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::{admin_middleware, auth_middleware};
use crate::routes::{
    AppState, delete_user, get_admin_users, get_profile, get_user, get_users, health, post_login,
    post_register, put_user, ready,
};

/// Build the application router
///
/// Health checks are public; auth routes are public; everything else sits
/// behind the bearer-token middleware, with /admin additionally behind the
/// admin middleware.
pub fn create_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/users", get(get_admin_users))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ));

    let protected_routes = Router::new()
        .route("/profile", get(get_profile))
        .route("/users", get(get_users))
        .route(
            "/users/{id}",
            get(get_user).put(put_user).delete(delete_user),
        )
        .merge(admin_routes)
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state.pool.clone())
        .merge(
            Router::new()
                .route("/login", post(post_login))
                .route("/register", post(post_register))
                .merge(protected_routes)
                .with_state(state),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn serve(config: Config, host: String, port: u16) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, config.database.max_connections).await?;

    let state = AppState {
        user_command: userhub_user::Command::new(pool.clone()),
        config,
        pool,
    };

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
