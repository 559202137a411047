//! Contact DTOs - Data Transfer Objects de contatos

use crate::entities::{Contact, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct para io com o client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContactDTO {
    pub contact_id: Option<i32>,
    pub org_id: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Contact> for ContactDTO {
    fn from(value: Contact) -> Self {
        Self {
            contact_id: Some(value.contact_id),
            org_id: Some(value.org_id),
            name: Some(value.name),
            phone: Some(value.phone),
            email: value.email,
            sentiment: value.sentiment,
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

/// DTO para criar um contato avulso (fora do fluxo de importação).
/// O telefone passa pela mesma normalização do import no service.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateContactDTO {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(min = 8, max = 20, message = "Phone must be between 8 and 20 characters"))]
    pub phone: String,

    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,

    pub sentiment: Option<Sentiment>,
}

/// DTO para atualizar um contato (só campos editáveis)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateContactDTO {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,

    pub sentiment: Option<Sentiment>,
}
