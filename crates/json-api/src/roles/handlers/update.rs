//! Update Role Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use roster_app::domain::roles::data::RoleUpdate;

use crate::{
    extensions::*,
    roles::{RoleResponse, errors::into_status_error},
};

/// Update Role Request
///
/// Both fields are replaced; omitted fields are cleared.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateRoleRequest> for RoleUpdate {
    fn from(request: UpdateRoleRequest) -> Self {
        RoleUpdate {
            name: request.name,
            description: request.description,
        }
    }
}

/// Role Update Handler
#[endpoint(
    tags("roles"),
    summary = "Update Role",
    responses(
        (status_code = StatusCode::OK, description = "Role updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "roles.update",
    skip(role_id, json, depot),
    fields(role = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    role_id: PathParam<String>,
    json: JsonBody<UpdateRoleRequest>,
    depot: &mut Depot,
) -> Result<Json<RoleResponse>, StatusError> {
    let state = depot.state()?;
    let role_id = role_id.into_inner();

    tracing::Span::current().record("role", role_id.as_str());

    let role = state
        .roles
        .update_role(&role_id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(role.into()))
}
