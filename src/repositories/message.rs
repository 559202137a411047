//! MessageRepository - Repositório de disparos
//!
//! Além do CRUD, concentra as queries count-only usadas pelo
//! analytics: o fetch de linhas é limitado ao teto de página, então
//! nenhum total exato pode ser derivado dele.

use super::{Create, PAGE_CAP, Read, Update};
use crate::dtos::{CreateMessageDTO, MessagesQuery, UpdateMessageDTO};
use crate::entities::{Message, MessageStatus};
use chrono::NaiveDate;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

const COLUMNS: &str = "message_id, org_id, contact_id, campaign_id, event_id, instance_id, \
                       content, status, sentiment, data_envio, created_at";

// MESSAGE REPO
pub struct MessageRepository {
    connection_pool: MySqlPool,
}

impl MessageRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Listagem filtrada por evento/campanha/status, paginada
    #[instrument(skip(self, query), fields(org_id = %org_id))]
    pub async fn find_many_filtered(
        &self,
        org_id: &i32,
        query: &MessagesQuery,
    ) -> Result<Vec<Message>, Error> {
        debug!("Listing messages");
        let limit = query.limit.unwrap_or(PAGE_CAP).clamp(1, PAGE_CAP);
        let offset = query.offset.unwrap_or(0).max(0);

        // filtros opcionais com o truque (? IS NULL OR coluna = ?)
        let messages = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM messages
            WHERE org_id = ?
              AND (? IS NULL OR event_id = ?)
              AND (? IS NULL OR campaign_id = ?)
              AND (? IS NULL OR status = ?)
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#
        ))
        .bind(org_id)
        .bind(query.event_id)
        .bind(query.event_id)
        .bind(query.campaign_id)
        .bind(query.campaign_id)
        .bind(&query.status)
        .bind(&query.status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(messages)
    }

    /// Linhas de um evento para a agregação em memória, com recorte
    /// opcional de dia. Limitado ao teto de página — os totais exatos
    /// vêm dos counts abaixo.
    pub async fn find_many_by_event(
        &self,
        event_id: &i32,
        selected_date: Option<&NaiveDate>,
    ) -> Result<Vec<Message>, Error> {
        let messages = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM messages
            WHERE event_id = ?
              AND (? IS NULL OR DATE(COALESCE(data_envio, created_at)) = ?)
            ORDER BY created_at ASC
            LIMIT ?
            "#
        ))
        .bind(event_id)
        .bind(selected_date)
        .bind(selected_date)
        .bind(PAGE_CAP)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(messages)
    }

    /// Total exato de disparos do evento (count-only, sem teto)
    pub async fn count_by_event(
        &self,
        event_id: &i32,
        selected_date: Option<&NaiveDate>,
    ) -> Result<u64, Error> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM messages
            WHERE event_id = ?
              AND (? IS NULL OR DATE(COALESCE(data_envio, created_at)) = ?)
            "#,
        )
        .bind(event_id)
        .bind(selected_date)
        .bind(selected_date)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(total as u64)
    }

    /// Total exato de um status de um evento. O service dispara um
    /// destes por status, em paralelo via try_join_all.
    pub async fn count_by_event_and_status(
        &self,
        event_id: &i32,
        status: &MessageStatus,
        selected_date: Option<&NaiveDate>,
    ) -> Result<u64, Error> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM messages
            WHERE event_id = ?
              AND status = ?
              AND (? IS NULL OR DATE(COALESCE(data_envio, created_at)) = ?)
            "#,
        )
        .bind(event_id)
        .bind(status)
        .bind(selected_date)
        .bind(selected_date)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(total as u64)
    }
}

impl Create<Message, CreateMessageDTO> for MessageRepository {
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages
                (org_id, contact_id, campaign_id, event_id, instance_id,
                 content, status, data_envio, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.org_id)
        .bind(data.contact_id)
        .bind(data.campaign_id)
        .bind(data.event_id)
        .bind(data.instance_id)
        .bind(&data.content)
        .bind(&data.status)
        .bind(data.data_envio)
        .bind(data.created_at)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        Ok(Message {
            message_id: new_id,
            org_id: data.org_id,
            contact_id: data.contact_id,
            campaign_id: data.campaign_id,
            event_id: data.event_id,
            instance_id: data.instance_id,
            content: data.content.clone(),
            status: data.status.clone(),
            sentiment: None,
            data_envio: data.data_envio,
            created_at: data.created_at,
        })
    }
}

impl Read<Message, i32> for MessageRepository {
    async fn read(&self, id: &i32) -> Result<Option<Message>, Error> {
        let message = sqlx::query_as::<_, Message>(&format!(
            "SELECT {COLUMNS} FROM messages WHERE message_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(message)
    }
}

impl Update<Message, UpdateMessageDTO, i32> for MessageRepository {
    /// Callback de entrega: muda status/sentimento e grava o carimbo
    /// de envio na primeira saída de {pendente, fila}
    async fn update(&self, id: &i32, data: &UpdateMessageDTO) -> Result<Message, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let status = data.status.clone().unwrap_or(current.status);
        let sentiment = data.sentiment.or(current.sentiment);
        let data_envio = data.data_envio.or(current.data_envio);

        sqlx::query(
            "UPDATE messages SET status = ?, sentiment = ?, data_envio = ? WHERE message_id = ?",
        )
        .bind(&status)
        .bind(&sentiment)
        .bind(data_envio)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}
