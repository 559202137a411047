//! Analytics services - Agregações de disparos de um evento
//!
//! O payload é montado em duas frentes: totais exatos por queries
//! count-only em paralelo, e baldes horários/sentimento/status pela
//! passada única do módulo `analytics` sobre a página buscada.
//! `build_event_analytics` é compartilhado com o endpoint público.

use crate::analytics;
use crate::core::{AppError, AppState};
use crate::dtos::{AnalyticsQuery, EventAnalyticsDTO};
use crate::entities::MessageStatus;
use crate::repositories::Read;
use axum::extract::{Json, Path, Query, State};
use chrono::NaiveDate;
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Monta o payload completo de analytics de um evento.
///
/// Os counts por status saem em paralelo (são independentes entre si,
/// sem estado compartilhado); a ordem do resultado segue
/// `MessageStatus::ALL`.
pub(crate) async fn build_event_analytics(
    state: &Arc<AppState>,
    event_id: i32,
    selected_date: Option<&NaiveDate>,
) -> Result<EventAnalyticsDTO, AppError> {
    debug!("Building analytics for event {}", event_id);

    // 1. Counts exatos: um count-only por status + o total, em paralelo
    let status_counts: Vec<u64> = try_join_all(MessageStatus::ALL.iter().map(|status| {
        let state = state.clone();
        async move {
            state
                .msg
                .count_by_event_and_status(&event_id, status, selected_date)
                .await
        }
    }))
    .await?;

    let total_messages = state.msg.count_by_event(&event_id, selected_date).await?;

    let count_of = |status: MessageStatus| -> u64 {
        MessageStatus::ALL
            .iter()
            .position(|s| *s == status)
            .map(|i| status_counts[i])
            .unwrap_or(0)
    };

    let pendentes = count_of(MessageStatus::Pendente) + count_of(MessageStatus::Fila);
    let respondidos = count_of(MessageStatus::Respondido);
    let lidos = count_of(MessageStatus::Lido) + respondidos;
    let entregues = count_of(MessageStatus::Entregue) + lidos;
    let falhas = count_of(MessageStatus::Erro);
    let enviados = total_messages.saturating_sub(pendentes);

    // 2. Baldes horários/sentimento/status: passada única sobre a
    //    página buscada (limitada ao teto; os totais acima não dependem dela)
    let rows = state.msg.find_many_by_event(&event_id, selected_date).await?;

    Ok(EventAnalyticsDTO {
        event_id,
        total_messages,
        enviados,
        entregues,
        lidos,
        respondidos,
        falhas,
        pendentes,
        hourly: analytics::hourly_activity(&rows),
        sentiments: analytics::sentiment_distribution(&rows),
        by_status: analytics::status_histogram(&rows),
    })
}

#[instrument(skip(state, query), fields(org_id = %org_id, event_id = %event_id))]
pub async fn get_event_analytics(
    State(state): State<Arc<AppState>>,
    Path((org_id, event_id)): Path<(i32, i32)>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<EventAnalyticsDTO>, AppError> {
    state
        .event
        .read(&event_id)
        .await?
        .filter(|e| e.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    let payload =
        build_event_analytics(&state, event_id, query.selected_date.as_ref()).await?;

    info!(
        "Analytics computed for event {} ({} messages)",
        event_id, payload.total_messages
    );
    Ok(Json(payload))
}
