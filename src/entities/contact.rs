//! Contact entity - Contato de uma organização

use super::enums::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Contact {
    pub contact_id: i32,
    pub org_id: i32,
    pub name: String,
    // somente dígitos, já com DDI (ver import::normalize_phone)
    pub phone: String,
    pub email: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
