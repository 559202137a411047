//! Event DTOs - Data Transfer Objects de eventos

use crate::entities::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventDTO {
    pub event_id: Option<i32>,
    pub org_id: Option<i32>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub template_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Event> for EventDTO {
    fn from(value: Event) -> Self {
        Self {
            event_id: Some(value.event_id),
            org_id: Some(value.org_id),
            slug: Some(value.slug),
            title: Some(value.title),
            description: value.description,
            event_date: Some(value.event_date),
            template_id: value.template_id,
            created_at: Some(value.created_at),
        }
    }
}

/// DTO para criar um evento (sem event_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateEventDTO {
    #[validate(regex(
        path = *crate::import::SLUG_RE,
        message = "Slug must contain only lowercase letters, digits and dashes"
    ))]
    pub slug: String,

    #[validate(length(min = 2, max = 160, message = "Title must be between 2 and 160 characters"))]
    pub title: String,

    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub template_id: Option<i32>,
}

/// DTO para atualizar um evento (só campos editáveis; o slug é imutável)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateEventDTO {
    #[validate(length(min = 2, max = 160, message = "Title must be between 2 and 160 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub template_id: Option<i32>,
}
