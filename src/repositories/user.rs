//! UserRepository - Repositório de operadores do painel

use super::{Create, Delete, Read};
use crate::dtos::CreateUserDTO;
use crate::entities::User;
use sqlx::{Error, MySqlPool};

// USER REPO
pub struct UserRepository {
    connection_pool: MySqlPool,
}

impl UserRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Busca por username exato (considerado único)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    /// O DTO chega aqui já com a senha hasheada pelo service
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(&data.username)
            .bind(&data.password)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_id() as i32;

        Ok(User {
            user_id: new_id,
            username: data.username.clone(),
            password: data.password.clone(),
        })
    }
}

impl Read<User, i32> for UserRepository {
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password FROM users WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Delete<i32> for UserRepository {
    /// Soft delete: anonimiza o username e zera a senha, preservando
    /// o histórico de mensagens e membership
    async fn delete(&self, user_id: &i32) -> Result<(), Error> {
        sqlx::query("UPDATE users SET username = CONCAT('removido#', user_id), password = '' WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
