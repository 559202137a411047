//! CampaignRepository - Repositório de campanhas

use super::{Delete, Read, Update};
use crate::dtos::{CreateCampaignDTO, UpdateCampaignDTO};
use crate::entities::{Campaign, CampaignStatus};
use sqlx::{Error, MySqlPool};

// CAMPAIGN REPO
pub struct CampaignRepository {
    connection_pool: MySqlPool,
}

impl CampaignRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_org(&self, org_id: &i32) -> Result<Vec<Campaign>, Error> {
        let campaigns = sqlx::query_as::<_, Campaign>(
            r#"
            SELECT campaign_id, org_id, name, template_id, instance_id,
                   sentiment_filter, status, scheduled_for, created_at
            FROM campaigns
            WHERE org_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(campaigns)
    }

    pub async fn create_in_org(
        &self,
        org_id: &i32,
        data: &CreateCampaignDTO,
    ) -> Result<Campaign, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO campaigns
                (org_id, name, template_id, instance_id, sentiment_filter, status, scheduled_for)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(org_id)
        .bind(&data.name)
        .bind(data.template_id)
        .bind(data.instance_id)
        .bind(&data.sentiment_filter)
        .bind(CampaignStatus::Rascunho)
        .bind(data.scheduled_for)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }

    /// Transição de status isolada (usada pelo dispatch)
    pub async fn set_status(&self, id: &i32, status: &CampaignStatus) -> Result<(), Error> {
        sqlx::query("UPDATE campaigns SET status = ? WHERE campaign_id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl Read<Campaign, i32> for CampaignRepository {
    async fn read(&self, id: &i32) -> Result<Option<Campaign>, Error> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            SELECT campaign_id, org_id, name, template_id, instance_id,
                   sentiment_filter, status, scheduled_for, created_at
            FROM campaigns
            WHERE campaign_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(campaign)
    }
}

impl Update<Campaign, UpdateCampaignDTO, i32> for CampaignRepository {
    async fn update(&self, id: &i32, data: &UpdateCampaignDTO) -> Result<Campaign, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let name = data.name.clone().unwrap_or(current.name);
        let template_id = data.template_id.unwrap_or(current.template_id);
        let instance_id = data.instance_id.or(current.instance_id);
        let sentiment_filter = data.sentiment_filter.or(current.sentiment_filter);
        let status = data.status.clone().unwrap_or(current.status);
        let scheduled_for = data.scheduled_for.or(current.scheduled_for);

        sqlx::query(
            r#"
            UPDATE campaigns
            SET name = ?, template_id = ?, instance_id = ?,
                sentiment_filter = ?, status = ?, scheduled_for = ?
            WHERE campaign_id = ?
            "#,
        )
        .bind(&name)
        .bind(template_id)
        .bind(instance_id)
        .bind(&sentiment_filter)
        .bind(&status)
        .bind(scheduled_for)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for CampaignRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM campaigns WHERE campaign_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
