//! Role Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use roster_app::domain::roles::records::RoleRecord;

/// Role Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoleResponse {
    /// Role id
    pub role_id: String,

    /// Linked authorization object
    pub object_id: Option<String>,

    /// Role name
    pub name: Option<String>,

    /// Role description
    pub description: Option<String>,

    /// Creation time (RFC 3339)
    pub created_at: String,

    /// Last update time (RFC 3339)
    pub updated_at: String,

    /// Soft-delete time (RFC 3339)
    pub deleted_at: Option<String>,
}

impl From<RoleRecord> for RoleResponse {
    fn from(role: RoleRecord) -> Self {
        Self {
            role_id: role.role_id,
            object_id: role.object_id,
            name: role.name,
            description: role.description,
            created_at: role.created_at.to_string(),
            updated_at: role.updated_at.to_string(),
            deleted_at: role.deleted_at.map(|at| at.to_string()),
        }
    }
}

/// Roles Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RolesResponse {
    /// One page of roles
    pub roles: Vec<RoleResponse>,
}
