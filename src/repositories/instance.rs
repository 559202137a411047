//! InstanceRepository - Repositório de instâncias de envio WhatsApp

use super::{Delete, Read, Update};
use crate::dtos::{CreateInstanceDTO, UpdateInstanceDTO};
use crate::entities::Instance;
use sqlx::{Error, MySqlPool};

// INSTANCE REPO
pub struct InstanceRepository {
    connection_pool: MySqlPool,
}

impl InstanceRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_org(&self, org_id: &i32) -> Result<Vec<Instance>, Error> {
        let instances = sqlx::query_as::<_, Instance>(
            r#"
            SELECT instance_id, org_id, label, phone_number, api_token, active, created_at
            FROM instances
            WHERE org_id = ?
            ORDER BY label ASC
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(instances)
    }

    pub async fn create_in_org(
        &self,
        org_id: &i32,
        data: &CreateInstanceDTO,
    ) -> Result<Instance, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO instances (org_id, label, phone_number, api_token, active)
            VALUES (?, ?, ?, ?, TRUE)
            "#,
        )
        .bind(org_id)
        .bind(&data.label)
        .bind(&data.phone_number)
        .bind(&data.api_token)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Read<Instance, i32> for InstanceRepository {
    async fn read(&self, id: &i32) -> Result<Option<Instance>, Error> {
        let instance = sqlx::query_as::<_, Instance>(
            r#"
            SELECT instance_id, org_id, label, phone_number, api_token, active, created_at
            FROM instances
            WHERE instance_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(instance)
    }
}

impl Update<Instance, UpdateInstanceDTO, i32> for InstanceRepository {
    async fn update(&self, id: &i32, data: &UpdateInstanceDTO) -> Result<Instance, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let label = data.label.clone().unwrap_or(current.label);
        let api_token = data.api_token.clone().unwrap_or(current.api_token);
        let active = data.active.unwrap_or(current.active);

        sqlx::query(
            "UPDATE instances SET label = ?, api_token = ?, active = ? WHERE instance_id = ?",
        )
        .bind(&label)
        .bind(&api_token)
        .bind(active)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for InstanceRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM instances WHERE instance_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
