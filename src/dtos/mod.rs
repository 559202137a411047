//! DTOs module - Data Transfer Objects
//!
//! Este módulo contém todos os DTOs usados na comunicação client-server.
//! Os DTOs separam a representação externa (API) da representação interna (entities).

pub mod analytics;
pub mod campaign;
pub mod contact;
pub mod event;
pub mod import;
pub mod instance;
pub mod message;
pub mod organization;
pub mod query;
pub mod template;
pub mod user;

// Re-exports para facilitar o import
pub use analytics::{
    EventAnalyticsDTO, HourlyActivityDTO, PublicEventStatusDTO, SentimentSliceDTO, StatusCountDTO,
};
pub use campaign::{
    CampaignDTO, CreateCampaignDTO, DispatchErrorDTO, DispatchReportDTO, UpdateCampaignDTO,
};
pub use contact::{ContactDTO, CreateContactDTO, UpdateContactDTO};
pub use event::{CreateEventDTO, EventDTO, UpdateEventDTO};
pub use import::{ImportErrorDTO, ImportReportDTO, ImportRequestDTO};
pub use instance::{CreateInstanceDTO, InstanceDTO, UpdateInstanceDTO};
pub use message::{CreateMessageDTO, MessageDTO, UpdateMessageDTO};
pub use organization::{CreateOrganizationDTO, MemberDTO, OrganizationDTO, UpdateOrganizationDTO};
pub use query::{AnalyticsQuery, ContactSearchQuery, MessagesQuery, PublicStatusQuery};
pub use template::{CreateTemplateDTO, TemplateDTO, UpdateTemplateDTO};
pub use user::{CreateUserDTO, UserDTO};
