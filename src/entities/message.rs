//! Message entity - Disparo individual para um contato

use super::enums::{MessageStatus, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub message_id: i32,
    pub org_id: i32,
    pub contact_id: i32,
    pub campaign_id: Option<i32>,
    pub event_id: Option<i32>,
    pub instance_id: Option<i32>,
    pub content: String,
    pub status: MessageStatus,
    pub sentiment: Option<Sentiment>,
    // instante em que o disparo saiu da fila; NULL enquanto pendente/fila.
    // o servidor espera uma string ISO8601 que o serde converte em DateTime<Utc>
    pub data_envio: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Conta como "enviado" nas agregações? Exige status fora de
    /// {pendente, fila} e carimbo de envio presente.
    pub fn counts_as_sent(&self) -> bool {
        !self.status.is_pending() && self.data_envio.is_some()
    }
}
