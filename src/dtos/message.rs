//! Message DTOs - Data Transfer Objects de disparos

use crate::entities::{Message, MessageStatus, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageDTO {
    pub message_id: Option<i32>,
    pub org_id: Option<i32>,
    pub contact_id: Option<i32>,
    pub campaign_id: Option<i32>,
    pub event_id: Option<i32>,
    pub instance_id: Option<i32>,
    pub content: Option<String>,
    pub status: Option<MessageStatus>,
    pub sentiment: Option<Sentiment>,
    pub data_envio: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Message> for MessageDTO {
    fn from(value: Message) -> Self {
        Self {
            message_id: Some(value.message_id),
            org_id: Some(value.org_id),
            contact_id: Some(value.contact_id),
            campaign_id: value.campaign_id,
            event_id: value.event_id,
            instance_id: value.instance_id,
            content: Some(value.content),
            status: Some(value.status),
            sentiment: value.sentiment,
            data_envio: value.data_envio,
            created_at: Some(value.created_at),
        }
    }
}

/// DTO para enfileirar um disparo (sem message_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateMessageDTO {
    pub org_id: i32,
    pub contact_id: i32,
    pub campaign_id: Option<i32>,
    pub event_id: Option<i32>,
    pub instance_id: Option<i32>,

    #[validate(length(min = 1, max = 5000, message = "Message content must be between 1 and 5000 characters"))]
    pub content: String,

    pub status: MessageStatus,
    pub data_envio: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// DTO de callback de entrega: transição de status e/ou classificação.
/// Quando o status sai de {pendente, fila} e ainda não há carimbo de
/// envio, o service grava data_envio = agora.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateMessageDTO {
    pub status: Option<MessageStatus>,
    pub sentiment: Option<Sentiment>,
    pub data_envio: Option<DateTime<Utc>>,
}
