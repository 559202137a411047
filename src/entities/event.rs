//! Event entity - Ação de outreach agendada

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Event {
    pub event_id: i32,
    pub org_id: i32,
    // único dentro da organização; compõe a URL pública junto com o slug da org
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub template_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
