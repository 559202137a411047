//! Services module - Coordenador de todos os handlers HTTP
//!
//! Cada sub-módulo agrupa os endpoints de uma funcionalidade.

pub mod analytics;
pub mod auth;
pub mod campaign;
pub mod contact;
pub mod event;
pub mod export;
pub mod instance;
pub mod message;
pub mod organization;
pub mod public;
pub mod template;

// Re-exports para facilitar o import
pub use analytics::get_event_analytics;
pub use auth::{delete_my_account, login_user, register_user};
pub use campaign::{
    create_campaign, delete_campaign, dispatch_campaign, get_campaign, list_campaigns,
    update_campaign,
};
pub use contact::{
    create_contact, delete_contact, export_contacts_csv, get_contact, import_contacts,
    list_contacts, update_contact,
};
pub use event::{create_event, delete_event, get_event, list_events, update_event};
pub use export::{export_event_pdf, export_event_xlsx};
pub use instance::{create_instance, delete_instance, list_instances, update_instance};
pub use message::{list_messages, update_message};
pub use organization::{
    create_organization, delete_organization, get_organization, list_members, list_organizations,
    remove_member, update_member_role, update_organization,
};
pub use public::{public_event_status_get, public_event_status_post};
pub use template::{
    create_template, delete_template, get_template, list_templates, preview_template,
    update_template,
};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
