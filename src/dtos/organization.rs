//! Organization DTOs - Data Transfer Objects de organizações

use crate::entities::{Organization, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrganizationDTO {
    pub org_id: Option<i32>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub country_code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Organization> for OrganizationDTO {
    fn from(value: Organization) -> Self {
        Self {
            org_id: Some(value.org_id),
            name: Some(value.name),
            slug: Some(value.slug),
            country_code: Some(value.country_code),
            created_at: Some(value.created_at),
        }
    }
}

/// DTO para criar uma organização (sem org_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateOrganizationDTO {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: String,

    // slug em minúsculo, sem espaço; vira parte da URL pública
    #[validate(regex(
        path = *crate::import::SLUG_RE,
        message = "Slug must contain only lowercase letters, digits and dashes"
    ))]
    pub slug: String,

    // DDI aplicado na importação de contatos; "55" quando omitido
    pub country_code: Option<String>,
}

/// DTO para atualizar uma organização (só campos editáveis)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateOrganizationDTO {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: Option<String>,
    pub country_code: Option<String>,
}

/// Membro de uma organização enriquecido com o username
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct MemberDTO {
    pub user_id: i32,
    pub username: String,
    pub user_role: UserRole,
    pub member_since: DateTime<Utc>,
}
