//! Export services - Relatórios de evento em PDF e XLSX
//!
//! Falha de geração é capturada aqui no topo: loga e aborta a única
//! tentativa com 500 (sem retry).

use super::analytics::build_event_analytics;
use crate::core::{AppError, AppState};
use crate::dtos::AnalyticsQuery;
use crate::export::{build_event_workbook, render_event_report};
use crate::repositories::Read;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[instrument(skip(state, query), fields(org_id = %org_id, event_id = %event_id))]
pub async fn export_event_pdf(
    State(state): State<Arc<AppState>>,
    Path((org_id, event_id)): Path<(i32, i32)>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event
        .read(&event_id)
        .await?
        .filter(|e| e.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    let analytics = build_event_analytics(&state, event_id, query.selected_date.as_ref()).await?;

    let bytes = render_event_report(&event.title, &analytics, Utc::now()).map_err(|e| {
        error!("PDF generation failed for event {}: {}", event_id, e);
        AppError::internal_server_error("Failed to generate PDF report")
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"relatorio-evento.pdf\""),
    );

    info!("PDF report generated for event {}", event_id);
    Ok((StatusCode::OK, headers, bytes))
}

#[instrument(skip(state, query), fields(org_id = %org_id, event_id = %event_id))]
pub async fn export_event_xlsx(
    State(state): State<Arc<AppState>>,
    Path((org_id, event_id)): Path<(i32, i32)>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event
        .read(&event_id)
        .await?
        .filter(|e| e.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    let analytics = build_event_analytics(&state, event_id, query.selected_date.as_ref()).await?;

    let bytes = build_event_workbook(&event.title, &analytics).map_err(|e| {
        error!("XLSX generation failed for event {}: {}", event_id, e);
        AppError::internal_server_error("Failed to generate XLSX report")
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"relatorio-evento.xlsx\""),
    );

    info!("XLSX report generated for event {}", event_id);
    Ok((StatusCode::OK, headers, bytes))
}
