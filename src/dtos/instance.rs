//! Instance DTOs - Data Transfer Objects de instâncias de envio

use crate::entities::Instance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client. O api_token nunca sai inteiro:
/// listagens devolvem só os quatro últimos caracteres.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstanceDTO {
    pub instance_id: Option<i32>,
    pub org_id: Option<i32>,
    pub label: Option<String>,
    pub phone_number: Option<String>,
    pub api_token_hint: Option<String>,
    pub active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Instance> for InstanceDTO {
    fn from(value: Instance) -> Self {
        let hint = value
            .api_token
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<String>();
        Self {
            instance_id: Some(value.instance_id),
            org_id: Some(value.org_id),
            label: Some(value.label),
            phone_number: Some(value.phone_number),
            api_token_hint: Some(format!("...{}", hint)),
            active: Some(value.active),
            created_at: Some(value.created_at),
        }
    }
}

/// DTO para cadastrar uma instância
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInstanceDTO {
    #[validate(length(min = 2, max = 80, message = "Label must be between 2 and 80 characters"))]
    pub label: String,

    #[validate(length(min = 8, max = 20, message = "Phone must be between 8 and 20 characters"))]
    pub phone_number: String,

    #[validate(length(min = 8, message = "API token looks too short"))]
    pub api_token: String,
}

/// DTO para atualizar uma instância (só campos editáveis)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateInstanceDTO {
    #[validate(length(min = 2, max = 80, message = "Label must be between 2 and 80 characters"))]
    pub label: Option<String>,

    #[validate(length(min = 8, message = "API token looks too short"))]
    pub api_token: Option<String>,

    pub active: Option<bool>,
}
