mod command;
pub mod jwt;
pub mod password;
mod repository;
mod types;
pub mod validate;

pub use command::{Command, LoginInput, RegisterInput, UpdateInput};
pub use jwt::{Claims, generate_jwt, validate_jwt};
pub use types::User;
