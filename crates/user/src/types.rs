use serde::{Deserialize, Serialize};
use userhub_shared::Role;

use crate::repository::UserRow;

/// Client-safe user representation. The credential hash never leaves the
/// repository layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            role: row.role.0,
            is_active: row.is_active,
        }
    }
}
