//! Roles service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::roles::{
        data::{NewRole, RoleUpdate},
        errors::RolesServiceError,
        records::{RoleId, RoleRecord},
        repository::PgRolesRepository,
    },
    identifiers::validate_external_id,
    pagination::ListParams,
};

#[derive(Debug, Clone)]
pub struct PgRolesService {
    repository: PgRolesRepository,
}

impl PgRolesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: PgRolesRepository::new(db),
        }
    }
}

#[async_trait]
impl RolesService for PgRolesService {
    #[tracing::instrument(
        name = "roles.service.create_role",
        skip(self, role),
        fields(role_id = %role.role_id),
        err
    )]
    async fn create_role(&self, role: NewRole) -> Result<RoleRecord, RolesServiceError> {
        validate_external_id(&role.role_id)?;

        let record = self.repository.create_role(&role).await?;

        info!(internal_id = %record.id, "created role");

        Ok(record)
    }

    async fn get_role(&self, role_id: &str) -> Result<RoleRecord, RolesServiceError> {
        Ok(self.repository.get_role(role_id).await?)
    }

    async fn get_role_by_id(&self, id: RoleId) -> Result<RoleRecord, RolesServiceError> {
        Ok(self.repository.get_role_by_id(id).await?)
    }

    async fn list_roles(
        &self,
        params: ListParams<RoleRecord>,
    ) -> Result<Vec<RoleRecord>, RolesServiceError> {
        Ok(self.repository.list_roles(&params).await?)
    }

    #[tracing::instrument(name = "roles.service.update_role", skip(self, update), err)]
    async fn update_role(
        &self,
        role_id: &str,
        update: RoleUpdate,
    ) -> Result<RoleRecord, RolesServiceError> {
        Ok(self.repository.update_role(role_id, update).await?)
    }

    #[tracing::instrument(name = "roles.service.delete_role", skip(self), err)]
    async fn delete_role(&self, role_id: &str) -> Result<(), RolesServiceError> {
        let rows_affected = self.repository.delete_role(role_id).await?;

        if rows_affected == 0 {
            return Err(RolesServiceError::NotFound);
        }

        info!("deleted role");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait RolesService: Send + Sync {
    /// Creates a role, recreating it in place if it was soft-deleted.
    async fn create_role(&self, role: NewRole) -> Result<RoleRecord, RolesServiceError>;

    /// Retrieves a live role by its role id.
    async fn get_role(&self, role_id: &str) -> Result<RoleRecord, RolesServiceError>;

    /// Retrieves a live role by its internal id.
    async fn get_role_by_id(&self, id: RoleId) -> Result<RoleRecord, RolesServiceError>;

    /// Lists one page of live roles.
    async fn list_roles(
        &self,
        params: ListParams<RoleRecord>,
    ) -> Result<Vec<RoleRecord>, RolesServiceError>;

    /// Replaces a live role's name and description.
    async fn update_role(
        &self,
        role_id: &str,
        update: RoleUpdate,
    ) -> Result<RoleRecord, RolesServiceError>;

    /// Soft-deletes a live role.
    async fn delete_role(&self, role_id: &str) -> Result<(), RolesServiceError>;
}
