//! Tenant Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use roster_app::domain::tenants::records::TenantRecord;

/// Tenant Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TenantResponse {
    /// Tenant id
    pub tenant_id: String,

    /// Linked authorization object
    pub object_id: Option<String>,

    /// Tenant name
    pub name: Option<String>,

    /// Creation time (RFC 3339)
    pub created_at: String,

    /// Last update time (RFC 3339)
    pub updated_at: String,

    /// Soft-delete time (RFC 3339), always absent for live tenants
    pub deleted_at: Option<String>,
}

impl From<TenantRecord> for TenantResponse {
    fn from(tenant: TenantRecord) -> Self {
        Self {
            tenant_id: tenant.tenant_id,
            object_id: tenant.object_id,
            name: tenant.name,
            created_at: tenant.created_at.to_string(),
            updated_at: tenant.updated_at.to_string(),
            deleted_at: tenant.deleted_at.map(|at| at.to_string()),
        }
    }
}

/// Tenants Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TenantsResponse {
    /// One page of tenants
    pub tenants: Vec<TenantResponse>,
}
