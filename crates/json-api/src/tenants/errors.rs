//! Tenant Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use roster_app::domain::tenants::TenantsServiceError;

pub(crate) fn into_status_error(error: TenantsServiceError) -> StatusError {
    match error {
        TenantsServiceError::InvalidParameter(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        TenantsServiceError::InvalidExternalId(source) => {
            StatusError::bad_request().brief(format!("invalid tenantId: {source}"))
        }
        TenantsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Tenant already exists")
        }
        TenantsServiceError::InvalidReference
        | TenantsServiceError::MissingRequiredData
        | TenantsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid tenant payload")
        }
        TenantsServiceError::NotFound => StatusError::not_found().brief("Tenant not found"),
        TenantsServiceError::Timeout => {
            warn!("tenant store timed out");

            StatusError::service_unavailable()
        }
        TenantsServiceError::Sql(source) => {
            error!("tenant store failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
