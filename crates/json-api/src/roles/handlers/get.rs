//! Get Role Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    roles::{RoleResponse, errors::into_status_error},
};

/// Get Role Handler
#[endpoint(
    tags("roles"),
    summary = "Get Role",
    responses(
        (status_code = StatusCode::OK, description = "Role found"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    role_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RoleResponse>, StatusError> {
    let state = depot.state()?;

    let role = state
        .roles
        .get_role(&role_id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(role.into()))
}
