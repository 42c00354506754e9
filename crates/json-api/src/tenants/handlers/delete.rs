//! Delete Tenant Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, tenants::errors::into_status_error};

/// Delete Tenant Handler
///
/// Soft-deletes the tenant. Deleting it again returns 404.
#[endpoint(
    tags("tenants"),
    summary = "Delete Tenant",
    responses(
        (status_code = StatusCode::OK, description = "Tenant deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Tenant not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    tenant_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;

    state
        .tenants
        .delete_tenant(&tenant_id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
