use userhub_shared::Error;

use crate::password;
use crate::repository::{self, FindType};
use crate::types::User;
use crate::validate;

pub struct UpdateInput {
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateInput,
    ) -> userhub_shared::Result<User> {
        let id = id.into();

        let Some(user) = repository::find(&self.pool, FindType::Id(id.to_owned())).await? else {
            return Err(Error::NotFound);
        };

        if let Some(email) = &input.email {
            if !validate::validate_email(email) {
                return Err(Error::InvalidInput("Invalid email format".to_string()));
            }

            // Uniqueness is re-checked against all *other* records
            if let Some(existing) =
                repository::find(&self.pool, FindType::Email(email.to_owned())).await?
            {
                if existing.id != user.id {
                    return Err(Error::DuplicateEmail);
                }
            }
        }

        let password_hash = match &input.password {
            Some(candidate) => {
                validate::validate_password(candidate)?;
                Some(password::hash(candidate)?)
            }
            None => None,
        };

        repository::update(
            &self.pool,
            repository::UpdateInput {
                id: user.id.to_owned(),
                email: input.email,
                password: password_hash,
                is_active: input.is_active,
                role: None,
            },
        )
        .await?;

        let Some(updated) = repository::find(&self.pool, FindType::Id(user.id)).await? else {
            return Err(Error::NotFound);
        };

        Ok(updated.into())
    }
}
