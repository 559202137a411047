//! Organization entity - Tenant dono de contatos, eventos, campanhas e templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Organization {
    pub org_id: i32,
    pub name: String,
    // slug único global, usado na URL pública de status de evento
    pub slug: String,
    // DDI prefixado na normalização de telefones ("55" por padrão)
    pub country_code: String,
    pub created_at: DateTime<Utc>,
}
