//! Traits comuns de repositório
//!
//! Interfaces genéricas para as operações de banco.

/// Trait de criação de entidades
///
/// # Type Parameters
/// * `Entity` - Tipo retornado (com o ID atribuído pelo banco)
/// * `CreateDTO` - DTO de criação (sem ID, gerado automaticamente)
pub trait Create<Entity, CreateDTO> {
    /// Cria uma nova entidade no banco
    ///
    /// # Returns
    /// * `Ok(Entity)` - Entidade criada com o ID atribuído pelo banco
    /// * `Err(sqlx::Error)` - Erro durante o insert
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait de leitura de uma entidade pela chave primária
///
/// # Type Parameters
/// * `Entity` - Tipo da entidade lida
/// * `Id` - Tipo da chave primária (ex.: `i32`, `String`, `(i32, i32)`)
pub trait Read<Entity, Id> {
    /// Lê uma entidade pela chave primária
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entidade encontrada
    /// * `Ok(None)` - Nenhuma entidade com esse ID
    /// * `Err(sqlx::Error)` - Erro durante a leitura
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait de atualização parcial
///
/// # Type Parameters
/// * `Entity` - Tipo da entidade atualizada
/// * `UpdateDTO` - DTO de atualização (campos opcionais; só os `Some(_)` mudam)
/// * `Id` - Tipo da chave primária
pub trait Update<Entity, UpdateDTO, Id> {
    /// Atualiza uma entidade existente
    ///
    /// # Returns
    /// * `Ok(Entity)` - Entidade atualizada
    /// * `Err(sqlx::Error)` - Erro durante o update (ex.: entidade inexistente)
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait de remoção
///
/// # Type Parameters
/// * `Id` - Tipo da chave primária
pub trait Delete<Id> {
    /// Remove uma entidade do banco
    ///
    /// # Returns
    /// * `Ok(())` - Remoção concluída
    /// * `Err(sqlx::Error)` - Erro durante a remoção
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
