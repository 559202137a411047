//! Campaign services - CRUD e disparo de campanhas

use crate::core::{AppError, AppState};
use crate::dtos::{
    CampaignDTO, CreateCampaignDTO, CreateMessageDTO, DispatchErrorDTO, DispatchReportDTO,
    UpdateCampaignDTO,
};
use crate::entities::{CampaignStatus, MessageStatus};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

pub async fn list_campaigns(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<Json<Vec<CampaignDTO>>, AppError> {
    let campaigns = state.campaign.find_many_by_org(&org_id).await?;
    Ok(Json(campaigns.into_iter().map(CampaignDTO::from).collect()))
}

pub async fn get_campaign(
    State(state): State<Arc<AppState>>,
    Path((org_id, campaign_id)): Path<(i32, i32)>,
) -> Result<Json<CampaignDTO>, AppError> {
    let campaign = state
        .campaign
        .read(&campaign_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Campaign not found"))?;

    Ok(Json(CampaignDTO::from(campaign)))
}

pub async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Json(body): Json<CreateCampaignDTO>,
) -> Result<Json<CampaignDTO>, AppError> {
    body.validate()?;

    // o template precisa existir e pertencer à org
    state
        .template
        .read(&body.template_id)
        .await?
        .filter(|t| t.org_id == org_id)
        .ok_or_else(|| AppError::bad_request("Template not found in this organization"))?;

    let campaign = state.campaign.create_in_org(&org_id, &body).await?;

    info!("Campaign {} created in org {}", campaign.campaign_id, org_id);
    Ok(Json(CampaignDTO::from(campaign)))
}

pub async fn update_campaign(
    State(state): State<Arc<AppState>>,
    Path((org_id, campaign_id)): Path<(i32, i32)>,
    Json(body): Json<UpdateCampaignDTO>,
) -> Result<Json<CampaignDTO>, AppError> {
    body.validate()?;

    state
        .campaign
        .read(&campaign_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Campaign not found"))?;

    let campaign = state.campaign.update(&campaign_id, &body).await?;
    Ok(Json(CampaignDTO::from(campaign)))
}

pub async fn delete_campaign(
    State(state): State<Arc<AppState>>,
    Path((org_id, campaign_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    state
        .campaign
        .read(&campaign_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Campaign not found"))?;

    state.campaign.delete(&campaign_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[debug_handler]
#[instrument(skip(state), fields(org_id = %org_id, campaign_id = %campaign_id))]
pub async fn dispatch_campaign(
    State(state): State<Arc<AppState>>,
    Path((org_id, campaign_id)): Path<(i32, i32)>,
) -> Result<Json<DispatchReportDTO>, AppError> {
    debug!("Dispatching campaign");
    // 1. Campanha precisa existir, pertencer à org e não estar concluída
    // 2. Carregar o template e o segmento de contatos (filtro de sentimento opcional)
    // 3. Renderizar o template POR CONTATO e enfileirar uma mensagem
    //    'fila' por vez, sequencialmente; falha de contato vira entrada
    //    de erro e o laço continua (sem rollback do lote)
    // 4. Campanha vai para em_andamento; o worker de entrega (fora
    //    deste repositório) é quem consome a fila

    let campaign = state
        .campaign
        .read(&campaign_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Campaign not found"))?;

    if campaign.status == CampaignStatus::Concluida {
        return Err(AppError::conflict("Campaign is already finished."));
    }

    let template = state
        .template
        .read(&campaign.template_id)
        .await?
        .filter(|t| t.org_id == org_id)
        .ok_or_else(|| AppError::bad_request("Campaign template no longer exists"))?;

    let contacts = state
        .contact
        .find_many_by_sentiment(&org_id, campaign.sentiment_filter.as_ref())
        .await?;

    debug!("Campaign segment has {} contacts", contacts.len());

    let mut report = DispatchReportDTO {
        campaign_id,
        total_contacts: contacts.len(),
        queued: 0,
        failed: Vec::new(),
    };

    for contact in &contacts {
        let mut vars = HashMap::new();
        vars.insert("nome".to_string(), contact.name.clone());
        vars.insert("telefone".to_string(), contact.phone.clone());

        let new_message = CreateMessageDTO {
            org_id,
            contact_id: contact.contact_id,
            campaign_id: Some(campaign_id),
            event_id: None,
            instance_id: campaign.instance_id,
            content: template.render(&vars),
            status: MessageStatus::Fila,
            data_envio: None,
            created_at: Utc::now(),
        };

        match state.msg.create(&new_message).await {
            Ok(_) => report.queued += 1,
            Err(e) => {
                warn!("Failed to queue message for contact {}: {}", contact.contact_id, e);
                report.failed.push(DispatchErrorDTO {
                    contact_id: contact.contact_id,
                    reason: "database write failed".to_string(),
                });
            }
        }
    }

    state
        .campaign
        .set_status(&campaign_id, &CampaignStatus::EmAndamento)
        .await?;

    info!(
        "Campaign {} dispatched: {} queued, {} failed",
        campaign_id,
        report.queued,
        report.failed.len()
    );
    Ok(Json(report))
}
