//! Core Module - Componentes de infraestrutura da aplicação
//!
//! Este módulo contém os componentes "core":
//! - Autenticação e JWT
//! - Configuração
//! - Tratamento de erros
//! - Estado da aplicação

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports para facilitar o import
pub use auth::{
    Claims, authentication_middleware, decode_jwt, encode_jwt, org_membership_middleware,
    require_role,
};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
