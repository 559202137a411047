//! Template services - CRUD e pré-visualização de templates

use crate::core::{AppError, AppState};
use crate::dtos::{CreateTemplateDTO, TemplateDTO, UpdateTemplateDTO};
use crate::repositories::{Delete, Read, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn list_templates(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<Json<Vec<TemplateDTO>>, AppError> {
    let templates = state.template.find_many_by_org(&org_id).await?;
    Ok(Json(templates.into_iter().map(TemplateDTO::from).collect()))
}

pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path((org_id, template_id)): Path<(i32, i32)>,
) -> Result<Json<TemplateDTO>, AppError> {
    let template = state
        .template
        .read(&template_id)
        .await?
        .filter(|t| t.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Template not found"))?;

    Ok(Json(TemplateDTO::from(template)))
}

pub async fn create_template(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Json(body): Json<CreateTemplateDTO>,
) -> Result<Json<TemplateDTO>, AppError> {
    body.validate()?;

    let template = state.template.create_in_org(&org_id, &body).await?;

    info!("Template {} created in org {}", template.template_id, org_id);
    Ok(Json(TemplateDTO::from(template)))
}

pub async fn update_template(
    State(state): State<Arc<AppState>>,
    Path((org_id, template_id)): Path<(i32, i32)>,
    Json(body): Json<UpdateTemplateDTO>,
) -> Result<Json<TemplateDTO>, AppError> {
    body.validate()?;

    state
        .template
        .read(&template_id)
        .await?
        .filter(|t| t.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Template not found"))?;

    let template = state.template.update(&template_id, &body).await?;
    Ok(Json(TemplateDTO::from(template)))
}

pub async fn delete_template(
    State(state): State<Arc<AppState>>,
    Path((org_id, template_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    state
        .template
        .read(&template_id)
        .await?
        .filter(|t| t.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Template not found"))?;

    state.template.delete(&template_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Corpo da pré-visualização: mapa variável -> valor
#[derive(serde::Deserialize)]
pub struct PreviewDTO {
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

/// Resposta com o texto renderizado
#[derive(serde::Serialize)]
pub struct RenderedDTO {
    pub rendered: String,
}

pub async fn preview_template(
    State(state): State<Arc<AppState>>,
    Path((org_id, template_id)): Path<(i32, i32)>,
    Json(body): Json<PreviewDTO>,
) -> Result<Json<RenderedDTO>, AppError> {
    let template = state
        .template
        .read(&template_id)
        .await?
        .filter(|t| t.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Template not found"))?;

    Ok(Json(RenderedDTO {
        rendered: template.render(&body.vars),
    }))
}
