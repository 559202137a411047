//! Enumerazioni - Tipos enumerados usados nas entidades

use serde::{Deserialize, Serialize};

// ********************* ENUMERAÇÕES ÚTEIS **********************//

/// Ciclo de vida de um disparo. Os valores em minúsculo são os que
/// trafegam no banco e na API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "message_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pendente,
    Fila,
    Enviado,
    Entregue,
    Lido,
    Respondido,
    Erro,
}

impl MessageStatus {
    /// Todos os status, na ordem do funil de entrega.
    pub const ALL: [MessageStatus; 7] = [
        MessageStatus::Pendente,
        MessageStatus::Fila,
        MessageStatus::Enviado,
        MessageStatus::Entregue,
        MessageStatus::Lido,
        MessageStatus::Respondido,
        MessageStatus::Erro,
    ];

    /// Rótulo usado no banco, na API e nos relatórios.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Pendente => "pendente",
            MessageStatus::Fila => "fila",
            MessageStatus::Enviado => "enviado",
            MessageStatus::Entregue => "entregue",
            MessageStatus::Lido => "lido",
            MessageStatus::Respondido => "respondido",
            MessageStatus::Erro => "erro",
        }
    }

    /// Um disparo ainda não saiu da fila?
    pub fn is_pending(&self) -> bool {
        matches!(self, MessageStatus::Pendente | MessageStatus::Fila)
    }
}

/// Classificação de engajamento atribuída a um contato ou mensagem.
/// O quinto balde ("não classificado") é a ausência de valor (NULL).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "sentiment")]
pub enum Sentiment {
    #[sqlx(rename = "Super Engajado")]
    #[serde(rename = "Super Engajado")]
    SuperEngajado,
    Positivo,
    Neutro,
    Negativo,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::SuperEngajado,
        Sentiment::Positivo,
        Sentiment::Neutro,
        Sentiment::Negativo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::SuperEngajado => "Super Engajado",
            Sentiment::Positivo => "Positivo",
            Sentiment::Neutro => "Neutro",
            Sentiment::Negativo => "Negativo",
        }
    }
}

/// Papel de um usuário do painel dentro de uma organização.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
pub enum UserRole {
    Owner,
    Admin,
    Member,
}

/// Estado de uma campanha de disparo em massa.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(type_name = "campaign_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Rascunho,
    Agendada,
    EmAndamento,
    Concluida,
}

/// Status calculado de um evento (não é persistido; derivado das
/// mensagens e da data do evento na hora da consulta).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Agendado,
    EmAndamento,
    Concluido,
}
