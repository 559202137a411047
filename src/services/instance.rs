//! Instance services - CRUD de instâncias de envio WhatsApp

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{CreateInstanceDTO, InstanceDTO, UpdateInstanceDTO};
use crate::entities::{OrgMember, UserRole};
use crate::repositories::{Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn list_instances(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<Json<Vec<InstanceDTO>>, AppError> {
    // o From<Instance> já troca o api_token pelo hint de 4 caracteres
    let instances = state.instance.find_many_by_org(&org_id).await?;
    Ok(Json(instances.into_iter().map(InstanceDTO::from).collect()))
}

pub async fn create_instance(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Extension(membership): Extension<OrgMember>,
    Json(body): Json<CreateInstanceDTO>,
) -> Result<Json<InstanceDTO>, AppError> {
    // credenciais de envio são assunto de administrador
    require_role(&membership, &[UserRole::Owner, UserRole::Admin])?;
    body.validate()?;

    let instance = state.instance.create_in_org(&org_id, &body).await?;

    info!("Instance {} registered in org {}", instance.instance_id, org_id);
    Ok(Json(InstanceDTO::from(instance)))
}

pub async fn update_instance(
    State(state): State<Arc<AppState>>,
    Path((org_id, instance_id)): Path<(i32, i32)>,
    Extension(membership): Extension<OrgMember>,
    Json(body): Json<UpdateInstanceDTO>,
) -> Result<Json<InstanceDTO>, AppError> {
    require_role(&membership, &[UserRole::Owner, UserRole::Admin])?;
    body.validate()?;

    state
        .instance
        .read(&instance_id)
        .await?
        .filter(|i| i.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Instance not found"))?;

    let instance = state.instance.update(&instance_id, &body).await?;
    Ok(Json(InstanceDTO::from(instance)))
}

pub async fn delete_instance(
    State(state): State<Arc<AppState>>,
    Path((org_id, instance_id)): Path<(i32, i32)>,
    Extension(membership): Extension<OrgMember>,
) -> Result<StatusCode, AppError> {
    require_role(&membership, &[UserRole::Owner, UserRole::Admin])?;

    state
        .instance
        .read(&instance_id)
        .await?
        .filter(|i| i.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Instance not found"))?;

    state.instance.delete(&instance_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
