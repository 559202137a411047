//! OrgMemberRepository - Repositório do vínculo usuário-organização

use super::{Create, Delete, Read};
use crate::dtos::MemberDTO;
use crate::entities::{OrgMember, UserRole};
use chrono::{DateTime, Utc};
use sqlx::{Error, MySqlPool};

/// DTO interno de criação de membership
pub struct CreateOrgMemberDTO {
    pub user_id: i32,
    pub org_id: i32,
    pub user_role: UserRole,
    pub member_since: DateTime<Utc>,
}

// ORG MEMBER REPO
pub struct OrgMemberRepository {
    connection_pool: MySqlPool,
}

impl OrgMemberRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Todas as memberships de um usuário (uma query; as orgs vêm
    /// depois com leituras por chave primária em paralelo)
    pub async fn find_many_by_user_id(&self, user_id: &i32) -> Result<Vec<OrgMember>, Error> {
        let members = sqlx::query_as::<_, OrgMember>(
            r#"
            SELECT user_id, org_id, user_role, member_since
            FROM org_members
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(members)
    }

    /// Lista de membros de uma organização enriquecida com o username
    pub async fn find_many_by_org_id(&self, org_id: &i32) -> Result<Vec<MemberDTO>, Error> {
        let members = sqlx::query_as::<_, MemberDTO>(
            r#"
            SELECT m.user_id, u.username, m.user_role, m.member_since
            FROM org_members m
            INNER JOIN users u ON u.user_id = m.user_id
            WHERE m.org_id = ?
            ORDER BY m.member_since ASC
            "#,
        )
        .bind(org_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(members)
    }

    pub async fn update_role(
        &self,
        id: &(i32, i32),
        user_role: &UserRole,
    ) -> Result<OrgMember, Error> {
        sqlx::query("UPDATE org_members SET user_role = ? WHERE user_id = ? AND org_id = ?")
            .bind(user_role)
            .bind(id.0)
            .bind(id.1)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Create<OrgMember, CreateOrgMemberDTO> for OrgMemberRepository {
    async fn create(&self, data: &CreateOrgMemberDTO) -> Result<OrgMember, Error> {
        sqlx::query(
            r#"
            INSERT INTO org_members (user_id, org_id, user_role, member_since)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(data.user_id)
        .bind(data.org_id)
        .bind(&data.user_role)
        .bind(data.member_since)
        .execute(&self.connection_pool)
        .await?;

        Ok(OrgMember {
            user_id: data.user_id,
            org_id: data.org_id,
            user_role: data.user_role.clone(),
            member_since: data.member_since,
        })
    }
}

impl Read<OrgMember, (i32, i32)> for OrgMemberRepository {
    /// Chave composta (user_id, org_id)
    async fn read(&self, id: &(i32, i32)) -> Result<Option<OrgMember>, Error> {
        let member = sqlx::query_as::<_, OrgMember>(
            r#"
            SELECT user_id, org_id, user_role, member_since
            FROM org_members
            WHERE user_id = ? AND org_id = ?
            "#,
        )
        .bind(id.0)
        .bind(id.1)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(member)
    }
}

impl Delete<(i32, i32)> for OrgMemberRepository {
    async fn delete(&self, id: &(i32, i32)) -> Result<(), Error> {
        sqlx::query("DELETE FROM org_members WHERE user_id = ? AND org_id = ?")
            .bind(id.0)
            .bind(id.1)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
