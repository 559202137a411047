//! Event services - CRUD de eventos

use crate::core::{AppError, AppState};
use crate::dtos::{CreateEventDTO, EventDTO, UpdateEventDTO};
use crate::repositories::{Delete, Read, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<Json<Vec<EventDTO>>, AppError> {
    let events = state.event.find_many_by_org(&org_id).await?;
    Ok(Json(events.into_iter().map(EventDTO::from).collect()))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path((org_id, event_id)): Path<(i32, i32)>,
) -> Result<Json<EventDTO>, AppError> {
    let event = state
        .event
        .read(&event_id)
        .await?
        .filter(|e| e.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    Ok(Json(EventDTO::from(event)))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Json(body): Json<CreateEventDTO>,
) -> Result<Json<EventDTO>, AppError> {
    // slug repetido dentro da org vira CONFLICT antes do insert
    body.validate()?;

    if state.event.find_by_slug(&org_id, &body.slug).await?.is_some() {
        warn!("Event slug already taken in org {}: {}", org_id, body.slug);
        return Err(AppError::conflict("An event with this slug already exists."));
    }

    let event = state.event.create_in_org(&org_id, &body).await?;

    info!("Event {} created in org {}", event.event_id, org_id);
    Ok(Json(EventDTO::from(event)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path((org_id, event_id)): Path<(i32, i32)>,
    Json(body): Json<UpdateEventDTO>,
) -> Result<Json<EventDTO>, AppError> {
    body.validate()?;

    state
        .event
        .read(&event_id)
        .await?
        .filter(|e| e.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    let event = state.event.update(&event_id, &body).await?;
    Ok(Json(EventDTO::from(event)))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path((org_id, event_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    state
        .event
        .read(&event_id)
        .await?
        .filter(|e| e.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    state.event.delete(&event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
