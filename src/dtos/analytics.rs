//! Analytics DTOs - Payloads das agregações de mensagens
//!
//! Estas structs são produzidas pelo módulo `analytics` (passada única
//! sobre as linhas já buscadas) e pelos counts exatos do repositório.

use crate::entities::{EventStatus, MessageStatus};
use serde::{Deserialize, Serialize};

/// Um dos 24 baldes horários. `enviados` conta só status fora de
/// {pendente, fila}; os demais campos são o funil acumulado.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HourlyActivityDTO {
    // 0..=23
    pub hour: u8,
    pub enviados: u64,
    pub entregues: u64,
    pub lidos: u64,
    pub respondidos: u64,
}

/// Uma fatia da distribuição de sentimento (5 baldes: 4 rótulos + não
/// classificado). Os percentuais somam 100 quando há mensagens.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SentimentSliceDTO {
    pub label: String,
    pub total: u64,
    pub percent: f64,
}

/// Entrada do histograma dinâmico de status, na ordem de primeira
/// aparição.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusCountDTO {
    pub status: MessageStatus,
    pub total: u64,
}

/// Payload completo de analytics de um evento.
///
/// Os totais vêm de queries count-only em paralelo (nunca do page
/// limitado); os baldes horários e de sentimento vêm da passada única
/// em memória.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventAnalyticsDTO {
    pub event_id: i32,
    pub total_messages: u64,
    pub enviados: u64,
    pub entregues: u64,
    pub lidos: u64,
    pub respondidos: u64,
    pub falhas: u64,
    pub pendentes: u64,
    pub hourly: Vec<HourlyActivityDTO>,
    pub sentiments: Vec<SentimentSliceDTO>,
    pub by_status: Vec<StatusCountDTO>,
}

/// Resposta do endpoint público de status de evento.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicEventStatusDTO {
    pub event_id: i32,
    pub org_slug: String,
    pub event_slug: String,
    pub title: String,
    pub status: EventStatus,
    pub analytics: EventAnalyticsDTO,
}
