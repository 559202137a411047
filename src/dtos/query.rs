//! Query DTOs - Data Transfer Objects de query parameters

use crate::entities::MessageStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Busca/paginação de contatos. O limite é truncado no teto de página
/// do repositório (1000 linhas).
#[derive(Serialize, Deserialize, Debug)]
pub struct ContactSearchQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Filtros da listagem de disparos.
#[derive(Serialize, Deserialize, Debug)]
pub struct MessagesQuery {
    #[serde(default)]
    pub event_id: Option<i32>,
    #[serde(default)]
    pub campaign_id: Option<i32>,
    #[serde(default)]
    pub status: Option<MessageStatus>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Recorte de data das agregações (dia único, UTC).
#[derive(Serialize, Deserialize, Debug)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
}

/// Identificação do evento no endpoint público: por id OU pelo par de
/// slugs. Aceito tanto na query string (GET) quanto no body JSON (POST).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicStatusQuery {
    #[serde(default, alias = "eventId")]
    pub event_id: Option<i32>,
    #[serde(default, alias = "orgSlug")]
    pub org_slug: Option<String>,
    #[serde(default, alias = "eventSlug")]
    pub event_slug: Option<String>,
    #[serde(default, alias = "selectedDate")]
    pub selected_date: Option<NaiveDate>,
}
