//! Test Helpers

use crate::{
    domain::{
        roles::{RolesService, RolesServiceError, data::NewRole, records::RoleRecord},
        tenants::{TenantsService, TenantsServiceError, data::NewTenant, records::TenantRecord},
    },
    test::TestContext,
};

pub(crate) async fn create_tenant(
    ctx: &TestContext,
    tenant_id: &str,
    name: Option<&str>,
) -> Result<TenantRecord, TenantsServiceError> {
    ctx.tenants
        .create_tenant(NewTenant {
            tenant_id: tenant_id.to_string(),
            object_id: None,
            name: name.map(str::to_string),
        })
        .await
}

pub(crate) async fn create_role(
    ctx: &TestContext,
    role_id: &str,
    name: Option<&str>,
) -> Result<RoleRecord, RolesServiceError> {
    ctx.roles
        .create_role(NewRole {
            role_id: role_id.to_string(),
            object_id: None,
            name: name.map(str::to_string),
            description: None,
        })
        .await
}
