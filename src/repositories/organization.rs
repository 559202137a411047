//! OrganizationRepository - Repositório de organizações (tenants)

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateOrganizationDTO, UpdateOrganizationDTO};
use crate::entities::Organization;
use crate::import::DEFAULT_COUNTRY_CODE;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

// ORGANIZATION REPO
pub struct OrganizationRepository {
    connection_pool: MySqlPool,
}

impl OrganizationRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Busca pelo slug global (rota pública)
    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Organization>, Error> {
        debug!("Reading organization by slug");
        let org = sqlx::query_as::<_, Organization>(
            r#"
            SELECT org_id, name, slug, country_code, created_at
            FROM organizations
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(org)
    }
}

impl Create<Organization, CreateOrganizationDTO> for OrganizationRepository {
    async fn create(&self, data: &CreateOrganizationDTO) -> Result<Organization, Error> {
        let country_code = data
            .country_code
            .clone()
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());

        let result =
            sqlx::query("INSERT INTO organizations (name, slug, country_code) VALUES (?, ?, ?)")
                .bind(&data.name)
                .bind(&data.slug)
                .bind(&country_code)
                .execute(&self.connection_pool)
                .await?;

        let new_id = result.last_insert_id() as i32;

        // releitura para trazer o created_at atribuído pelo banco
        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Read<Organization, i32> for OrganizationRepository {
    async fn read(&self, id: &i32) -> Result<Option<Organization>, Error> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            SELECT org_id, name, slug, country_code, created_at
            FROM organizations
            WHERE org_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(org)
    }
}

impl Update<Organization, UpdateOrganizationDTO, i32> for OrganizationRepository {
    async fn update(&self, id: &i32, data: &UpdateOrganizationDTO) -> Result<Organization, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let name = data.name.clone().unwrap_or(current.name);
        let country_code = data.country_code.clone().unwrap_or(current.country_code);

        sqlx::query("UPDATE organizations SET name = ?, country_code = ? WHERE org_id = ?")
            .bind(&name)
            .bind(&country_code)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for OrganizationRepository {
    /// Remoção dura: as tabelas filhas caem em cascata (FK ON DELETE CASCADE)
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM organizations WHERE org_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
