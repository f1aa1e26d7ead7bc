use userhub_shared::Error;

use crate::repository;

impl super::Command {
    pub async fn delete(&self, id: impl Into<String>) -> userhub_shared::Result<()> {
        let rows_affected = repository::delete(&self.pool, id.into()).await?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
