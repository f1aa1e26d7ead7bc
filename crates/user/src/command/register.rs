use ulid::Ulid;
use userhub_shared::Error;
use validator::Validate;

use crate::password;
use crate::repository::{self, FindType};
use crate::types::User;
use crate::validate::{self, EMAIL_RE};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(regex(path = *EMAIL_RE, message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

impl super::Command {
    pub async fn register(&self, input: RegisterInput) -> userhub_shared::Result<User> {
        input.validate()?;
        validate::validate_password(&input.password)?;

        if repository::find(&self.pool, FindType::Email(input.email.to_owned()))
            .await?
            .is_some()
        {
            return Err(Error::DuplicateEmail);
        }

        let password_hash = password::hash(&input.password)?;
        let id = Ulid::new().to_string();

        repository::create(&self.pool, id.to_owned(), input.email, password_hash).await?;

        let Some(user) = repository::find(&self.pool, FindType::Id(id)).await? else {
            return Err(Error::Unknown(anyhow::anyhow!("user missing after insert")));
        };

        Ok(user.into())
    }
}
