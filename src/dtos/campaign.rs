//! Campaign DTOs - Data Transfer Objects de campanhas

use crate::entities::{Campaign, CampaignStatus, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CampaignDTO {
    pub campaign_id: Option<i32>,
    pub org_id: Option<i32>,
    pub name: Option<String>,
    pub template_id: Option<i32>,
    pub instance_id: Option<i32>,
    pub sentiment_filter: Option<Sentiment>,
    pub status: Option<CampaignStatus>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Campaign> for CampaignDTO {
    fn from(value: Campaign) -> Self {
        Self {
            campaign_id: Some(value.campaign_id),
            org_id: Some(value.org_id),
            name: Some(value.name),
            template_id: Some(value.template_id),
            instance_id: value.instance_id,
            sentiment_filter: value.sentiment_filter,
            status: Some(value.status),
            scheduled_for: value.scheduled_for,
            created_at: Some(value.created_at),
        }
    }
}

/// DTO para criar uma campanha (nasce como rascunho)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCampaignDTO {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: String,

    pub template_id: i32,
    pub instance_id: Option<i32>,
    pub sentiment_filter: Option<Sentiment>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// DTO para atualizar uma campanha (só campos editáveis)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateCampaignDTO {
    #[validate(length(min = 2, max = 120, message = "Name must be between 2 and 120 characters"))]
    pub name: Option<String>,
    pub template_id: Option<i32>,
    pub instance_id: Option<i32>,
    pub sentiment_filter: Option<Sentiment>,
    pub status: Option<CampaignStatus>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Resultado de um disparo de campanha: quantos entraram na fila e
/// quais contatos falharam (a falha de um não aborta o lote)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DispatchReportDTO {
    pub campaign_id: i32,
    pub total_contacts: usize,
    pub queued: usize,
    pub failed: Vec<DispatchErrorDTO>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DispatchErrorDTO {
    pub contact_id: i32,
    pub reason: String,
}
