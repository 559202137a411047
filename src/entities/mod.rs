//! Entities module - Entidades do domínio
//!
//! Este módulo contém todas as entidades (models) que representam os dados persistidos no banco.
//! Cada entity corresponde a uma tabela.

pub mod campaign;
pub mod contact;
pub mod enums;
pub mod event;
pub mod instance;
pub mod message;
pub mod org_member;
pub mod organization;
pub mod template;
pub mod user;

// Re-exports para facilitar o import
pub use campaign::Campaign;
pub use contact::Contact;
pub use enums::{CampaignStatus, EventStatus, MessageStatus, Sentiment, UserRole};
pub use event::Event;
pub use instance::Instance;
pub use message::Message;
pub use org_member::OrgMember;
pub use organization::Organization;
pub use template::Template;
pub use user::User;
