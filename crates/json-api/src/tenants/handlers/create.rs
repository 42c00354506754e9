//! Create Tenant Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roster_app::domain::tenants::data::NewTenant;

use crate::{
    extensions::*,
    tenants::{TenantResponse, errors::into_status_error},
};

/// Create Tenant Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTenantRequest {
    /// Tenant id; a random UUID is assigned when omitted
    pub tenant_id: Option<String>,

    /// Linked authorization object
    pub object_id: Option<String>,

    /// Tenant name
    pub name: Option<String>,
}

impl From<CreateTenantRequest> for NewTenant {
    fn from(request: CreateTenantRequest) -> Self {
        NewTenant {
            tenant_id: request
                .tenant_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            object_id: request.object_id,
            name: request.name,
        }
    }
}

/// Create Tenant Handler
///
/// Creating a soft-deleted tenant id recreates it in place.
#[endpoint(
    tags("tenants"),
    summary = "Create Tenant",
    responses(
        (status_code = StatusCode::CREATED, description = "Tenant created"),
        (status_code = StatusCode::CONFLICT, description = "Tenant already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage timed out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTenantRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TenantResponse>, StatusError> {
    let state = depot.state()?;

    let tenant = state
        .tenants
        .create_tenant(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/v1/tenants/{}", tenant.tenant_id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(tenant.into()))
}
