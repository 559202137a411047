//! EventRepository - Repositório de eventos

use super::{Delete, Read, Update};
use crate::dtos::{CreateEventDTO, UpdateEventDTO};
use crate::entities::Event;
use sqlx::{Error, MySqlPool};

// EVENT REPO
pub struct EventRepository {
    connection_pool: MySqlPool,
}

impl EventRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_org(&self, org_id: &i32) -> Result<Vec<Event>, Error> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, org_id, slug, title, description, event_date, template_id, created_at
            FROM events
            WHERE org_id = ?
            ORDER BY event_date DESC
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(events)
    }

    /// Resolve o evento da URL pública (slug único dentro da org)
    pub async fn find_by_slug(&self, org_id: &i32, slug: &str) -> Result<Option<Event>, Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, org_id, slug, title, description, event_date, template_id, created_at
            FROM events
            WHERE org_id = ? AND slug = ?
            "#,
        )
        .bind(org_id)
        .bind(slug)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(event)
    }

    pub async fn create_in_org(&self, org_id: &i32, data: &CreateEventDTO) -> Result<Event, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO events (org_id, slug, title, description, event_date, template_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(org_id)
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.event_date)
        .bind(data.template_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Read<Event, i32> for EventRepository {
    async fn read(&self, id: &i32) -> Result<Option<Event>, Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, org_id, slug, title, description, event_date, template_id, created_at
            FROM events
            WHERE event_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(event)
    }
}

impl Update<Event, UpdateEventDTO, i32> for EventRepository {
    /// O slug é imutável depois de criado (está em URLs públicas já distribuídas)
    async fn update(&self, id: &i32, data: &UpdateEventDTO) -> Result<Event, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let title = data.title.clone().unwrap_or(current.title);
        let description = data.description.clone().or(current.description);
        let event_date = data.event_date.unwrap_or(current.event_date);
        let template_id = data.template_id.or(current.template_id);

        sqlx::query(
            r#"
            UPDATE events
            SET title = ?, description = ?, event_date = ?, template_id = ?
            WHERE event_id = ?
            "#,
        )
        .bind(&title)
        .bind(&description)
        .bind(event_date)
        .bind(template_id)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for EventRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM events WHERE event_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
