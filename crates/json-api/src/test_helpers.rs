//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use roster_app::{
    context::AppContext,
    domain::{
        roles::{
            MockRolesService,
            records::{RoleId, RoleRecord},
        },
        tenants::{
            MockTenantsService,
            records::{TenantId, TenantRecord},
        },
    },
};

use crate::state::State;

pub(crate) fn make_tenant(tenant_id: &str) -> TenantRecord {
    TenantRecord {
        id: TenantId::from_i64(1),
        tenant_id: tenant_id.to_string(),
        object_id: None,
        name: Some(format!("Tenant {tenant_id}")),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_role(role_id: &str) -> RoleRecord {
    RoleRecord {
        id: RoleId::from_i64(1),
        role_id: role_id.to_string(),
        object_id: None,
        name: Some(format!("Role {role_id}")),
        description: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

fn strict_tenants_mock() -> MockTenantsService {
    let mut tenants = MockTenantsService::new();

    tenants.expect_create_tenant().never();
    tenants.expect_get_tenant().never();
    tenants.expect_get_tenant_by_id().never();
    tenants.expect_list_tenants().never();
    tenants.expect_update_tenant().never();
    tenants.expect_delete_tenant().never();

    tenants
}

fn strict_roles_mock() -> MockRolesService {
    let mut roles = MockRolesService::new();

    roles.expect_create_role().never();
    roles.expect_get_role().never();
    roles.expect_get_role_by_id().never();
    roles.expect_list_roles().never();
    roles.expect_update_role().never();
    roles.expect_delete_role().never();

    roles
}

fn state_with(tenants: MockTenantsService, roles: MockRolesService) -> Arc<State> {
    Arc::new(State::from(AppContext {
        tenants: Arc::new(tenants),
        roles: Arc::new(roles),
    }))
}

pub(crate) fn tenants_service(tenants: MockTenantsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(tenants, strict_roles_mock())))
            .push(route),
    )
}

pub(crate) fn roles_service(roles: MockRolesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_tenants_mock(), roles)))
            .push(route),
    )
}
