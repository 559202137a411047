//! Campaign entity - Disparo em massa sobre um segmento de contatos

use super::enums::{CampaignStatus, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Campaign {
    pub campaign_id: i32,
    pub org_id: i32,
    pub name: String,
    pub template_id: i32,
    pub instance_id: Option<i32>,
    // quando presente, o disparo atinge só contatos com esse sentimento
    pub sentiment_filter: Option<Sentiment>,
    pub status: CampaignStatus,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
