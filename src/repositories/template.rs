//! TemplateRepository - Repositório de templates de mensagem

use super::{Delete, Read, Update};
use crate::dtos::{CreateTemplateDTO, UpdateTemplateDTO};
use crate::entities::Template;
use sqlx::{Error, MySqlPool};

// TEMPLATE REPO
pub struct TemplateRepository {
    connection_pool: MySqlPool,
}

impl TemplateRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_org(&self, org_id: &i32) -> Result<Vec<Template>, Error> {
        let templates = sqlx::query_as::<_, Template>(
            r#"
            SELECT template_id, org_id, name, content, created_at
            FROM templates
            WHERE org_id = ?
            ORDER BY name ASC
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(templates)
    }

    pub async fn create_in_org(
        &self,
        org_id: &i32,
        data: &CreateTemplateDTO,
    ) -> Result<Template, Error> {
        let result =
            sqlx::query("INSERT INTO templates (org_id, name, content) VALUES (?, ?, ?)")
                .bind(org_id)
                .bind(&data.name)
                .bind(&data.content)
                .execute(&self.connection_pool)
                .await?;

        let new_id = result.last_insert_id() as i32;

        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Read<Template, i32> for TemplateRepository {
    async fn read(&self, id: &i32) -> Result<Option<Template>, Error> {
        let template = sqlx::query_as::<_, Template>(
            r#"
            SELECT template_id, org_id, name, content, created_at
            FROM templates
            WHERE template_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(template)
    }
}

impl Update<Template, UpdateTemplateDTO, i32> for TemplateRepository {
    async fn update(&self, id: &i32, data: &UpdateTemplateDTO) -> Result<Template, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let name = data.name.clone().unwrap_or(current.name);
        let content = data.content.clone().unwrap_or(current.content);

        sqlx::query("UPDATE templates SET name = ?, content = ? WHERE template_id = ?")
            .bind(&name)
            .bind(&content)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for TemplateRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM templates WHERE template_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
