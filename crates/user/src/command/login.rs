use userhub_shared::Error;

use crate::password;
use crate::repository::{self, FindType};
use crate::types::User;

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl super::Command {
    /// Check credentials against the stored hash. Absent user and hash
    /// mismatch are indistinguishable to the caller.
    pub async fn login(&self, input: LoginInput) -> userhub_shared::Result<User> {
        let Some(user_row) = repository::find(&self.pool, FindType::Email(input.email)).await?
        else {
            return Err(Error::InvalidCredentials);
        };

        if !password::verify(&user_row.password, &input.password) {
            return Err(Error::InvalidCredentials);
        }

        Ok(user_row.into())
    }
}
