use sqlx::SqlitePool;

use crate::repository::{self, FindType};
use crate::types::User;

mod delete;
mod login;
mod register;
mod set_role;
mod update;

pub use login::LoginInput;
pub use register::RegisterInput;
pub use update::UpdateInput;

/// Entry point for every user operation. Endpoint handlers are the only
/// callers; nothing else touches the users table.
#[derive(Clone)]
pub struct Command {
    pub pool: SqlitePool,
}

impl Command {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, id: impl Into<String>) -> userhub_shared::Result<Option<User>> {
        let row = repository::find(&self.pool, FindType::Id(id.into())).await?;

        Ok(row.map(User::from))
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> userhub_shared::Result<Option<User>> {
        let row = repository::find(&self.pool, FindType::Email(email.into())).await?;

        Ok(row.map(User::from))
    }

    pub async fn list(&self) -> userhub_shared::Result<Vec<User>> {
        let rows = repository::all(&self.pool).await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
