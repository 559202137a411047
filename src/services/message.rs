//! Message services - Listagem e callbacks de entrega

use crate::core::{AppError, AppState};
use crate::dtos::{MessageDTO, MessagesQuery, UpdateMessageDTO};
use crate::repositories::{Read, Update};
use axum::extract::{Json, Path, Query, State};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageDTO>>, AppError> {
    let messages = state.msg.find_many_filtered(&org_id, &query).await?;

    info!("Retrieved {} messages for org {}", messages.len(), org_id);
    Ok(Json(messages.into_iter().map(MessageDTO::from).collect()))
}

/// Callback de entrega vindo do worker/painel: transição de status,
/// classificação de sentimento ou ambos.
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    Path((org_id, message_id)): Path<(i32, i32)>,
    Json(mut body): Json<UpdateMessageDTO>,
) -> Result<Json<MessageDTO>, AppError> {
    let current = state
        .msg
        .read(&message_id)
        .await?
        .filter(|m| m.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Message not found"))?;

    // primeira saída de {pendente, fila} carimba o data_envio
    if let Some(ref status) = body.status {
        if !status.is_pending() && current.data_envio.is_none() && body.data_envio.is_none() {
            body.data_envio = Some(Utc::now());
        }
    }

    let message = state.msg.update(&message_id, &body).await?;
    Ok(Json(MessageDTO::from(message)))
}
