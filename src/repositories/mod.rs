//! Repositories module - Coordenador de todos os repositórios
//!
//! Cada repositório encapsula as operações de banco de uma entidade
//! sobre o pool compartilhado. As queries usam a forma runtime-checked
//! do sqlx (`query`/`query_as` em função) com bind posicional `?` do
//! MySQL; o parse para as entities vem do derive `FromRow`.

// Declaração dos sub-módulos
pub mod campaign;
pub mod contact;
pub mod event;
pub mod instance;
pub mod message;
pub mod org_member;
pub mod organization;
pub mod template;
pub mod traits;
pub mod user;

// Re-exportação dos traits para facilitar o import
pub use traits::{Create, Delete, Read, Update};

// Re-exportação das structs dos repositórios para facilitar o import
pub use campaign::CampaignRepository;
pub use contact::ContactRepository;
pub use event::EventRepository;
pub use instance::InstanceRepository;
pub use message::MessageRepository;
pub use org_member::OrgMemberRepository;
pub use organization::OrganizationRepository;
pub use template::TemplateRepository;
pub use user::UserRepository;

/// Teto de linhas de qualquer fetch paginado. Totais exatos SEMPRE
/// saem de queries count-only, nunca de uma página limitada.
pub const PAGE_CAP: i64 = 1000;
