//! Template DTOs - Data Transfer Objects de templates de mensagem

use crate::entities::Template;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TemplateDTO {
    pub template_id: Option<i32>,
    pub org_id: Option<i32>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Template> for TemplateDTO {
    fn from(value: Template) -> Self {
        Self {
            template_id: Some(value.template_id),
            org_id: Some(value.org_id),
            name: Some(value.name),
            content: Some(value.content),
            created_at: Some(value.created_at),
        }
    }
}

/// DTO para criar um template (sem template_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateTemplateDTO {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be between 1 and 5000 characters"))]
    pub content: String,
}

/// DTO para atualizar um template (só campos editáveis)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateTemplateDTO {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Content must be between 1 and 5000 characters"))]
    pub content: Option<String>,
}
