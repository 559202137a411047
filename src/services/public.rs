//! Public services - Status público de evento (sem autenticação)
//!
//! Página de status consumida por convidados: aceita o evento por id
//! OU pelo par org_slug + event_slug, via query string (GET) ou body
//! JSON (POST). CORS aberto para qualquer origem (aplicado no router).
//! A agregação é a MESMA do endpoint autenticado
//! (`build_event_analytics`), sem duplicação de lógica.

use super::analytics::build_event_analytics;
use crate::core::{AppError, AppState};
use crate::dtos::{PublicEventStatusDTO, PublicStatusQuery};
use crate::entities::{Event, EventStatus};
use crate::repositories::Read;
use axum::extract::{Json, Query, State};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub async fn public_event_status_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PublicStatusQuery>,
) -> Result<Json<PublicEventStatusDTO>, AppError> {
    resolve_event_status(state, query).await.map(Json)
}

pub async fn public_event_status_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PublicStatusQuery>,
) -> Result<Json<PublicEventStatusDTO>, AppError> {
    resolve_event_status(state, body).await.map(Json)
}

/// Resolve o evento e calcula status + analytics.
///
/// Contrato de erro da rota pública:
/// * 400 - nenhum identificador utilizável;
/// * 404 - organização ou evento inexistente;
/// * 500 - falha de banco (aqui não vale o mapeamento 4xx padrão).
#[instrument(skip(state, query))]
async fn resolve_event_status(
    state: Arc<AppState>,
    query: PublicStatusQuery,
) -> Result<PublicEventStatusDTO, AppError> {
    debug!("Resolving public event status");
    let selected_date = query.selected_date;

    let (event, org_slug) = match (query.event_id, query.org_slug, query.event_slug) {
        (Some(event_id), _, _) => {
            let event = state
                .event
                .read(&event_id)
                .await
                .map_err(db_failure)?
                .ok_or_else(|| AppError::not_found("Event not found"))?;

            let org = state
                .org
                .read(&event.org_id)
                .await
                .map_err(db_failure)?
                .ok_or_else(|| AppError::not_found("Organization not found"))?;

            (event, org.slug)
        }
        (None, Some(org_slug), Some(event_slug)) => {
            let org = state
                .org
                .find_by_slug(&org_slug)
                .await
                .map_err(db_failure)?
                .ok_or_else(|| AppError::not_found("Organization not found"))?;

            let event = state
                .event
                .find_by_slug(&org.org_id, &event_slug)
                .await
                .map_err(db_failure)?
                .ok_or_else(|| AppError::not_found("Event not found"))?;

            (event, org.slug)
        }
        _ => {
            warn!("Public status request without usable identifiers");
            return Err(AppError::bad_request(
                "Provide event_id or org_slug + event_slug",
            ));
        }
    };

    let analytics = build_event_analytics(&state, event.event_id, selected_date.as_ref()).await?;

    let status = computed_status(&event, analytics.total_messages, analytics.pendentes);

    info!(
        "Public status served for event {} ({:?})",
        event.event_id, status
    );

    Ok(PublicEventStatusDTO {
        event_id: event.event_id,
        org_slug,
        event_slug: event.slug,
        title: event.title,
        status,
        analytics,
    })
}

/// Status derivado: agendado enquanto não há disparos e a data não
/// passou; em andamento enquanto resta fila; concluído no resto.
fn computed_status(event: &Event, total_messages: u64, pendentes: u64) -> EventStatus {
    if total_messages == 0 {
        if event.event_date > Utc::now() {
            EventStatus::Agendado
        } else {
            EventStatus::Concluido
        }
    } else if pendentes > 0 {
        EventStatus::EmAndamento
    } else {
        EventStatus::Concluido
    }
}

/// Na rota pública, falha de banco é 500 e não o 4xx do mapeamento padrão
fn db_failure(err: sqlx::Error) -> AppError {
    warn!("Database failure on public route: {}", err);
    AppError::internal_server_error("Failed to query event status")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(event_date: chrono::DateTime<Utc>) -> Event {
        Event {
            event_id: 1,
            org_id: 1,
            slug: "lancamento".to_string(),
            title: "Lançamento".to_string(),
            description: None,
            event_date,
            template_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn future_event_without_messages_is_scheduled() {
        let e = event(Utc::now() + Duration::days(2));
        assert_eq!(computed_status(&e, 0, 0), EventStatus::Agendado);
    }

    #[test]
    fn event_with_queue_is_in_progress() {
        let e = event(Utc::now() - Duration::hours(1));
        assert_eq!(computed_status(&e, 120, 15), EventStatus::EmAndamento);
    }

    #[test]
    fn drained_queue_means_finished() {
        let e = event(Utc::now() - Duration::hours(1));
        assert_eq!(computed_status(&e, 120, 0), EventStatus::Concluido);
        // evento passado sem nenhum disparo também conta como encerrado
        assert_eq!(computed_status(&e, 0, 0), EventStatus::Concluido);
    }
}
