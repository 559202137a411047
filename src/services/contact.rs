//! Contact services - CRUD, importação em lote e exportação CSV

use crate::core::{AppError, AppState};
use crate::dtos::{
    ContactDTO, ContactSearchQuery, CreateContactDTO, ImportErrorDTO, ImportReportDTO,
    ImportRequestDTO, UpdateContactDTO,
};
use crate::export::contacts_to_csv;
use crate::import::{self, DEFAULT_CONTACT_NAME};
use crate::repositories::{Delete, PAGE_CAP, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, query), fields(org_id = %org_id))]
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Query(query): Query<ContactSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(PAGE_CAP);
    let offset = query.offset.unwrap_or(0).max(0);

    let contacts = state
        .contact
        .find_many_by_org(&org_id, query.search.as_deref(), limit, offset)
        .await?;

    // total exato vem de um count-only: a página acima é limitada ao
    // teto e não serve de contagem
    let total = state.contact.count_by_org(&org_id).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        "X-Total-Count",
        HeaderValue::from_str(&total.to_string())
            .map_err(|_| AppError::internal_server_error("Failed to build count header"))?,
    );

    info!("Retrieved {} contacts for org {}", contacts.len(), org_id);

    let body: Json<Vec<ContactDTO>> = Json(contacts.into_iter().map(ContactDTO::from).collect());
    Ok((headers, body))
}

pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path((org_id, contact_id)): Path<(i32, i32)>,
) -> Result<Json<ContactDTO>, AppError> {
    let contact = state
        .contact
        .read(&contact_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Contact not found"))?;

    Ok(Json(ContactDTO::from(contact)))
}

#[instrument(skip(state, body), fields(org_id = %org_id))]
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Json(body): Json<CreateContactDTO>,
) -> Result<Json<ContactDTO>, AppError> {
    // 1. Validar o DTO
    // 2. Normalizar o telefone com o DDI da organização
    // 3. Telefone já cadastrado -> CONFLICT (o merge é só do fluxo de importação)
    body.validate()?;

    let country_code = org_country_code(&state, &org_id).await?;
    let phone = import::normalize_phone(&body.phone, &country_code)
        .map_err(|reason| AppError::bad_request("Invalid phone number").with_details(reason))?;

    if state.contact.find_by_phone(&org_id, &phone).await?.is_some() {
        return Err(AppError::conflict("A contact with this phone already exists."));
    }

    let data = CreateContactDTO { phone, ..body };
    let contact = state.contact.create_in_org(&org_id, &data).await?;

    info!("Contact {} created in org {}", contact.contact_id, org_id);
    Ok(Json(ContactDTO::from(contact)))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path((org_id, contact_id)): Path<(i32, i32)>,
    Json(body): Json<UpdateContactDTO>,
) -> Result<Json<ContactDTO>, AppError> {
    body.validate()?;

    state
        .contact
        .read(&contact_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Contact not found"))?;

    let contact = state.contact.update(&contact_id, &body).await?;
    Ok(Json(ContactDTO::from(contact)))
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path((org_id, contact_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    state
        .contact
        .read(&contact_id)
        .await?
        .filter(|c| c.org_id == org_id)
        .ok_or_else(|| AppError::not_found("Contact not found"))?;

    state.contact.delete(&contact_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, body), fields(org_id = %org_id))]
pub async fn import_contacts(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
    Json(body): Json<ImportRequestDTO>,
) -> Result<Json<ImportReportDTO>, AppError> {
    debug!("Importing contacts from pasted text");
    // 1. Validar o corpo (texto não vazio)
    // 2. Parser em passada única: contatos válidos + linhas rejeitadas
    // 3. Upsert SEQUENCIAL por telefone: existente -> merge do nome,
    //    novo -> insert. Falha de linha não aborta o lote: vira erro
    //    no relatório e o laço continua.
    body.validate()?;

    let country_code = org_country_code(&state, &org_id).await?;
    let default_name = body.default_name.as_deref().unwrap_or(DEFAULT_CONTACT_NAME);

    let batch = import::parse_contact_list(&body.text, &country_code, default_name);

    let mut report = ImportReportDTO {
        total_lines: batch.total_lines,
        errors: batch.errors,
        ..Default::default()
    };

    for parsed in &batch.contacts {
        let existing = match state.contact.find_by_phone(&org_id, &parsed.phone).await {
            Ok(existing) => existing,
            Err(e) => {
                warn!("Lookup failed for phone during import: {}", e);
                report.errors.push(ImportErrorDTO {
                    line: parsed.line,
                    content: parsed.phone.clone(),
                    reason: "database lookup failed".to_string(),
                });
                continue;
            }
        };

        let result = match existing {
            // reimportação do mesmo telefone atualiza em vez de duplicar
            Some(contact) => state
                .contact
                .update(
                    &contact.contact_id,
                    &UpdateContactDTO {
                        name: Some(parsed.name.clone()),
                        email: None,
                        sentiment: None,
                    },
                )
                .await
                .map(|_| &mut report.updated),
            None => state
                .contact
                .create_in_org(
                    &org_id,
                    &CreateContactDTO {
                        name: parsed.name.clone(),
                        phone: parsed.phone.clone(),
                        email: None,
                        sentiment: None,
                    },
                )
                .await
                .map(|_| &mut report.imported),
        };

        match result {
            Ok(counter) => *counter += 1,
            Err(e) => {
                warn!("Failed to persist imported contact: {}", e);
                report.errors.push(ImportErrorDTO {
                    line: parsed.line,
                    content: parsed.phone.clone(),
                    reason: "database write failed".to_string(),
                });
            }
        }
    }

    info!(
        "Import finished for org {}: {} imported, {} updated, {} errors",
        org_id,
        report.imported,
        report.updated,
        report.errors.len()
    );
    Ok(Json(report))
}

#[instrument(skip(state), fields(org_id = %org_id))]
pub async fn export_contacts_csv(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Exporting contact list as CSV");
    let contacts = state
        .contact
        .find_many_by_org(&org_id, None, PAGE_CAP, 0)
        .await?;

    let csv = contacts_to_csv(&contacts);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"contatos.csv\""),
    );

    info!("Exported {} contacts from org {}", contacts.len(), org_id);
    Ok((StatusCode::OK, headers, csv))
}

/// DDI da organização, com fallback para o DDI da instalação
async fn org_country_code(state: &Arc<AppState>, org_id: &i32) -> Result<String, AppError> {
    Ok(state
        .org
        .read(org_id)
        .await?
        .map(|org| org.country_code)
        .unwrap_or_else(|| state.default_country_code.clone()))
}
