//! Get Tenant Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    tenants::{TenantResponse, errors::into_status_error},
};

/// Get Tenant Handler
#[endpoint(
    tags("tenants"),
    summary = "Get Tenant",
    responses(
        (status_code = StatusCode::OK, description = "Tenant found"),
        (status_code = StatusCode::NOT_FOUND, description = "Tenant not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    tenant_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<TenantResponse>, StatusError> {
    let state = depot.state()?;

    let tenant = state
        .tenants
        .get_tenant(&tenant_id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(tenant.into()))
}
