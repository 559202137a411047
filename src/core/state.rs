//! Application State - Estado global da aplicação
//!
//! Contém todos os repositórios, configurações e estado compartilhado
//! entre rotas e middleware.

use crate::repositories::{
    CampaignRepository, ContactRepository, EventRepository, InstanceRepository,
    MessageRepository, OrgMemberRepository, OrganizationRepository, TemplateRepository,
    UserRepository,
};
use sqlx::MySqlPool;

/// Estado global compartilhado entre todas as rotas e middleware
pub struct AppState {
    /// Repositório de operadores do painel
    pub user: UserRepository,

    /// Repositório de organizações (tenants)
    pub org: OrganizationRepository,

    /// Repositório do vínculo usuário-organização
    pub member: OrgMemberRepository,

    /// Repositório de contatos
    pub contact: ContactRepository,

    /// Repositório de eventos
    pub event: EventRepository,

    /// Repositório de campanhas
    pub campaign: CampaignRepository,

    /// Repositório de templates de mensagem
    pub template: TemplateRepository,

    /// Repositório de instâncias de envio
    pub instance: InstanceRepository,

    /// Repositório de disparos
    pub msg: MessageRepository,

    /// Secret key dos tokens JWT
    pub jwt_secret: String,

    /// DDI padrão para normalização de telefone quando a organização
    /// não define o próprio
    pub default_country_code: String,
}

impl AppState {
    /// Cria uma nova instância de AppState inicializando todos os
    /// repositórios com o pool de conexões fornecido.
    ///
    /// # Arguments
    /// * `pool` - Pool de conexões MySQL compartilhado
    /// * `jwt_secret` - Chave secreta de assinatura dos tokens JWT
    /// * `default_country_code` - DDI padrão da instalação
    pub fn new(pool: MySqlPool, jwt_secret: String, default_country_code: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            org: OrganizationRepository::new(pool.clone()),
            member: OrgMemberRepository::new(pool.clone()),
            contact: ContactRepository::new(pool.clone()),
            event: EventRepository::new(pool.clone()),
            campaign: CampaignRepository::new(pool.clone()),
            template: TemplateRepository::new(pool.clone()),
            instance: InstanceRepository::new(pool.clone()),
            msg: MessageRepository::new(pool),
            jwt_secret,
            default_country_code,
        }
    }
}
