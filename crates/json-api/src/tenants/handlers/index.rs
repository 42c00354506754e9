//! Tenant Index Handler

use salvo::prelude::*;

use roster_app::{domain::tenants::TenantsServiceError, pagination::ListParams};

use crate::{
    extensions::*,
    tenants::{TenantsResponse, errors::into_status_error},
};

/// Tenant Index Handler
///
/// Returns one page of live tenants. Accepts `query`, `sortBy`, `sortOrder`,
/// `afterId`/`afterValue` or `beforeId`/`beforeValue`, and `limit`.
#[endpoint(
    tags("tenants"),
    summary = "List Tenants",
    responses(
        (status_code = StatusCode::OK, description = "Page of tenants"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid list parameters"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage timed out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<TenantsResponse>, StatusError> {
    let state = depot.state()?;

    let params = ListParams::parse(req.list_request()?)
        .map_err(TenantsServiceError::from)
        .map_err(into_status_error)?;

    let tenants = state
        .tenants
        .list_tenants(params)
        .await
        .map_err(into_status_error)?;

    Ok(Json(TenantsResponse {
        tenants: tenants.into_iter().map(Into::into).collect(),
    }))
}
