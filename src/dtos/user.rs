//! User DTOs - Data Transfer Objects de operadores do painel

use crate::entities::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client (nunca expõe o hash de senha)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub user_id: Option<i32>,
    pub username: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            user_id: Some(value.user_id),
            username: Some(value.username),
        }
    }
}

/// DTO de cadastro (a senha chega em claro e é hasheada no service)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be between 8 and 72 characters"))]
    pub password: String,
}
