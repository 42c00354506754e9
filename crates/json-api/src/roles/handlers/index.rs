//! Role Index Handler

use salvo::prelude::*;

use roster_app::{domain::roles::RolesServiceError, pagination::ListParams};

use crate::{
    extensions::*,
    roles::{RolesResponse, errors::into_status_error},
};

/// Role Index Handler
///
/// Returns one page of live roles. Accepts `query`, `sortBy`, `sortOrder`,
/// `afterId`/`afterValue` or `beforeId`/`beforeValue`, and `limit`.
#[endpoint(
    tags("roles"),
    summary = "List Roles",
    responses(
        (status_code = StatusCode::OK, description = "Page of roles"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid list parameters"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage timed out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<RolesResponse>, StatusError> {
    let state = depot.state()?;

    let params = ListParams::parse(req.list_request()?)
        .map_err(RolesServiceError::from)
        .map_err(into_status_error)?;

    let roles = state
        .roles
        .list_roles(params)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RolesResponse {
        roles: roles.into_iter().map(Into::into).collect(),
    }))
}
