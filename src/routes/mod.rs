use sqlx::SqlitePool;

mod admin;
mod auth;
mod health;
mod users;

pub use admin::get_admin_users;
pub use auth::{get_profile, post_login, post_register};
pub use health::{health, ready};
pub use users::{delete_user, get_user, get_users, put_user};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: userhub_user::Command,
    pub pool: SqlitePool,
}
