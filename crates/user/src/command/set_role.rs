use userhub_shared::{Error, Role};

use crate::repository::{self, FindType};

impl super::Command {
    /// Change an account's role. Only reachable from the CLI; no HTTP
    /// endpoint mutates roles.
    pub async fn set_role(
        &self,
        id: impl Into<String>,
        role: Role,
    ) -> userhub_shared::Result<()> {
        let id = id.into();

        if repository::find(&self.pool, FindType::Id(id.to_owned()))
            .await?
            .is_none()
        {
            return Err(Error::NotFound);
        }

        repository::update(
            &self.pool,
            repository::UpdateInput {
                id,
                email: None,
                password: None,
                is_active: None,
                role: Some(role),
            },
        )
        .await?;

        Ok(())
    }
}
