//! Instance entity - Endpoint de envio WhatsApp configurado (número + credenciais)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Instance {
    pub instance_id: i32,
    pub org_id: i32,
    pub label: String,
    pub phone_number: String,
    // nunca devolver em listagens; ver InstanceDTO
    pub api_token: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
