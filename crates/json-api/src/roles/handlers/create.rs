//! Create Role Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roster_app::domain::roles::data::NewRole;

use crate::{
    extensions::*,
    roles::{RoleResponse, errors::into_status_error},
};

/// Create Role Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRoleRequest {
    /// Role id; a random UUID is assigned when omitted
    pub role_id: Option<String>,

    /// Linked authorization object
    pub object_id: Option<String>,

    /// Role name
    pub name: Option<String>,

    /// Role description
    pub description: Option<String>,
}

impl From<CreateRoleRequest> for NewRole {
    fn from(request: CreateRoleRequest) -> Self {
        NewRole {
            role_id: request
                .role_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            object_id: request.object_id,
            name: request.name,
            description: request.description,
        }
    }
}

/// Create Role Handler
#[endpoint(
    tags("roles"),
    summary = "Create Role",
    responses(
        (status_code = StatusCode::CREATED, description = "Role created"),
        (status_code = StatusCode::CONFLICT, description = "Role already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage timed out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRoleRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RoleResponse>, StatusError> {
    let state = depot.state()?;

    let role = state
        .roles
        .create_role(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/v1/roles/{}", role.role_id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(role.into()))
}
