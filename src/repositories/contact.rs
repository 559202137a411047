//! ContactRepository - Repositório de contatos

use super::{Delete, PAGE_CAP, Read, Update};
use crate::dtos::{CreateContactDTO, UpdateContactDTO};
use crate::entities::{Contact, Sentiment};
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

// CONTACT REPO
pub struct ContactRepository {
    connection_pool: MySqlPool,
}

impl ContactRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Listagem paginada, com busca opcional por prefixo de nome ou
    /// telefone. O limite é truncado no teto de página.
    #[instrument(skip(self, search), fields(org_id = %org_id))]
    pub async fn find_many_by_org(
        &self,
        org_id: &i32,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, Error> {
        debug!("Listing contacts");
        let limit = limit.clamp(1, PAGE_CAP);

        let contacts = if let Some(term) = search {
            let pattern = format!("{}%", term);
            sqlx::query_as::<_, Contact>(
                r#"
                SELECT contact_id, org_id, name, phone, email, sentiment, created_at, updated_at
                FROM contacts
                WHERE org_id = ? AND (name LIKE ? OR phone LIKE ?)
                ORDER BY name ASC
                LIMIT ? OFFSET ?
                "#,
            )
            .bind(org_id)
            .bind(&pattern)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await?
        } else {
            sqlx::query_as::<_, Contact>(
                r#"
                SELECT contact_id, org_id, name, phone, email, sentiment, created_at, updated_at
                FROM contacts
                WHERE org_id = ?
                ORDER BY name ASC
                LIMIT ? OFFSET ?
                "#,
            )
            .bind(org_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await?
        };

        Ok(contacts)
    }

    /// Busca pelo telefone normalizado (único por organização); é a
    /// chave do upsert da importação
    pub async fn find_by_phone(&self, org_id: &i32, phone: &str) -> Result<Option<Contact>, Error> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT contact_id, org_id, name, phone, email, sentiment, created_at, updated_at
            FROM contacts
            WHERE org_id = ? AND phone = ?
            "#,
        )
        .bind(org_id)
        .bind(phone)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(contact)
    }

    /// Contatos de um segmento de campanha (todos, ou só os do
    /// sentimento filtrado)
    pub async fn find_many_by_sentiment(
        &self,
        org_id: &i32,
        sentiment: Option<&Sentiment>,
    ) -> Result<Vec<Contact>, Error> {
        let contacts = if let Some(sentiment) = sentiment {
            sqlx::query_as::<_, Contact>(
                r#"
                SELECT contact_id, org_id, name, phone, email, sentiment, created_at, updated_at
                FROM contacts
                WHERE org_id = ? AND sentiment = ?
                ORDER BY contact_id ASC
                "#,
            )
            .bind(org_id)
            .bind(sentiment)
            .fetch_all(&self.connection_pool)
            .await?
        } else {
            sqlx::query_as::<_, Contact>(
                r#"
                SELECT contact_id, org_id, name, phone, email, sentiment, created_at, updated_at
                FROM contacts
                WHERE org_id = ?
                ORDER BY contact_id ASC
                "#,
            )
            .bind(org_id)
            .fetch_all(&self.connection_pool)
            .await?
        };

        Ok(contacts)
    }

    /// Insert direto usado pela importação (o telefone já chega
    /// normalizado pelo parser)
    pub async fn create_in_org(
        &self,
        org_id: &i32,
        data: &CreateContactDTO,
    ) -> Result<Contact, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO contacts (org_id, name, phone, email, sentiment)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(org_id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.sentiment)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }

    /// Total exato de contatos da organização (count-only)
    pub async fn count_by_org(&self, org_id: &i32) -> Result<i64, Error> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE org_id = ?")
                .bind(org_id)
                .fetch_one(&self.connection_pool)
                .await?;

        Ok(total)
    }
}

impl Read<Contact, i32> for ContactRepository {
    async fn read(&self, id: &i32) -> Result<Option<Contact>, Error> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT contact_id, org_id, name, phone, email, sentiment, created_at, updated_at
            FROM contacts
            WHERE contact_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(contact)
    }
}

impl Update<Contact, UpdateContactDTO, i32> for ContactRepository {
    async fn update(&self, id: &i32, data: &UpdateContactDTO) -> Result<Contact, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let name = data.name.clone().unwrap_or(current.name);
        let email = data.email.clone().or(current.email);
        let sentiment = data.sentiment.or(current.sentiment);

        sqlx::query(
            r#"
            UPDATE contacts
            SET name = ?, email = ?, sentiment = ?, updated_at = CURRENT_TIMESTAMP
            WHERE contact_id = ?
            "#,
        )
        .bind(&name)
        .bind(&email)
        .bind(&sentiment)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for ContactRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM contacts WHERE contact_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
