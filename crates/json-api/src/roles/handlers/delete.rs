//! Delete Role Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, roles::errors::into_status_error};

/// Delete Role Handler
///
/// Soft-deletes the role. Deleting it again returns 404.
#[endpoint(
    tags("roles"),
    summary = "Delete Role",
    responses(
        (status_code = StatusCode::OK, description = "Role deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Role not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    role_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;

    state
        .roles
        .delete_role(&role_id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
