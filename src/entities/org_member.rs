//! OrgMember entity - Vínculo usuário-organização com papel

use super::enums::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct OrgMember {
    pub user_id: i32,
    pub org_id: i32,
    pub user_role: UserRole,
    pub member_since: DateTime<Utc>,
}
