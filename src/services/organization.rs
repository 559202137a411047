//! Organization services - Gestão de organizações e membros

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{CreateOrganizationDTO, MemberDTO, OrganizationDTO, UpdateOrganizationDTO};
use crate::entities::{OrgMember, Organization, User, UserRole};
use crate::repositories::{Create, Delete, Read, Update};
use crate::repositories::org_member::CreateOrgMemberDTO;
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::Utc;
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_organizations(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<OrganizationDTO>>, AppError> {
    debug!("Listing organizations for user");
    // 1. Memberships do usuário em uma query
    // 2. Leituras por chave primária em paralelo (lookup rápido)
    // 3. Conversão para DTO em memória
    let org_ids: Vec<i32> = state
        .member
        .find_many_by_user_id(&current_user.user_id)
        .await?
        .into_iter()
        .map(|m| m.org_id)
        .collect();

    debug!("User is member of {} organizations", org_ids.len());

    let orgs: Vec<Organization> = try_join_all(org_ids.into_iter().map(|oid| {
        let state = state.clone();
        async move { state.org.read(&oid).await }
    }))
    .await?
    .into_iter()
    .flatten()
    .collect();

    let orgs_dto: Vec<OrganizationDTO> = orgs.into_iter().map(OrganizationDTO::from).collect();

    info!("Successfully retrieved {} organizations", orgs_dto.len());
    Ok(Json(orgs_dto))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateOrganizationDTO>,
) -> Result<Json<OrganizationDTO>, AppError> {
    debug!("Creating new organization");
    // 1. Validar o DTO (nome, formato do slug)
    // 2. Slug é único global: clash vira CONFLICT antes do insert
    // 3. Criar a organização e a membership Owner do criador
    body.validate()?;

    if state.org.find_by_slug(&body.slug).await?.is_some() {
        warn!("Organization slug already taken: {}", body.slug);
        return Err(AppError::conflict("An organization with this slug already exists."));
    }

    let org = state.org.create(&body).await?;

    let owner_membership = CreateOrgMemberDTO {
        user_id: current_user.user_id,
        org_id: org.org_id,
        user_role: UserRole::Owner,
        member_since: Utc::now(),
    };
    state.member.create(&owner_membership).await?;

    info!(
        "Organization '{}' created by user {}",
        org.name, current_user.user_id
    );
    Ok(Json(OrganizationDTO::from(org)))
}

pub async fn get_organization(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<Json<OrganizationDTO>, AppError> {
    let org = state
        .org
        .read(&org_id)
        .await?
        .ok_or_else(|| AppError::not_found("Organization not found"))?;

    Ok(Json(OrganizationDTO::from(org)))
}

#[instrument(skip(state, membership, body), fields(org_id = %org_id))]
pub async fn update_organization(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Extension(membership): Extension<OrgMember>, // vem do org_membership_middleware
    Json(body): Json<UpdateOrganizationDTO>,
) -> Result<Json<OrganizationDTO>, AppError> {
    body.validate()?;
    require_role(&membership, &[UserRole::Owner, UserRole::Admin])?;

    let org = state.org.update(&org_id, &body).await?;

    info!("Organization {} updated", org_id);
    Ok(Json(OrganizationDTO::from(org)))
}

#[instrument(skip(state, membership), fields(org_id = %org_id))]
pub async fn delete_organization(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Extension(membership): Extension<OrgMember>,
) -> Result<StatusCode, AppError> {
    // só o Owner pode derrubar o tenant inteiro
    require_role(&membership, &[UserRole::Owner])?;

    state.org.delete(&org_id).await?;

    info!("Organization {} deleted", org_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<Json<Vec<MemberDTO>>, AppError> {
    let members = state.member.find_many_by_org_id(&org_id).await?;
    Ok(Json(members))
}

#[instrument(skip(state, membership, body), fields(org_id = %org_id, target = %user_id))]
pub async fn update_member_role(
    State(state): State<Arc<AppState>>,
    Path((org_id, user_id)): Path<(i32, i32)>,
    Extension(membership): Extension<OrgMember>,
    Json(body): Json<UserRole>,
) -> Result<Json<MemberDTO>, AppError> {
    // 1. Só o Owner redistribui papéis
    // 2. O próprio Owner não se rebaixa por esta rota (ficaria uma org sem dono)
    // 3. Atualizar o papel e devolver o membro enriquecido
    require_role(&membership, &[UserRole::Owner])?;

    if user_id == membership.user_id {
        warn!("Owner attempted to change own role in org {}", org_id);
        return Err(AppError::bad_request("The owner cannot change their own role."));
    }

    state
        .member
        .read(&(user_id, org_id))
        .await?
        .ok_or_else(|| AppError::not_found("User is not a member of this organization"))?;

    state.member.update_role(&(user_id, org_id), &body).await?;

    let members = state.member.find_many_by_org_id(&org_id).await?;
    let updated = members
        .into_iter()
        .find(|m| m.user_id == user_id)
        .ok_or_else(|| AppError::internal_server_error("Member vanished during update"))?;

    info!("Role of user {} in org {} updated", user_id, org_id);
    Ok(Json(updated))
}

#[instrument(skip(state, membership), fields(org_id = %org_id, target = %user_id))]
pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    Path((org_id, user_id)): Path<(i32, i32)>,
    Extension(membership): Extension<OrgMember>,
) -> Result<StatusCode, AppError> {
    require_role(&membership, &[UserRole::Owner, UserRole::Admin])?;

    let target = state
        .member
        .read(&(user_id, org_id))
        .await?
        .ok_or_else(|| AppError::not_found("User is not a member of this organization"))?;

    if target.user_role == UserRole::Owner {
        warn!("Attempt to remove the owner of org {}", org_id);
        return Err(AppError::forbidden("The owner cannot be removed."));
    }

    state.member.delete(&(user_id, org_id)).await?;

    info!("User {} removed from org {}", user_id, org_id);
    Ok(StatusCode::NO_CONTENT)
}
