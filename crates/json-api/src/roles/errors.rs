//! Role Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use roster_app::domain::roles::RolesServiceError;

pub(crate) fn into_status_error(error: RolesServiceError) -> StatusError {
    match error {
        RolesServiceError::InvalidParameter(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        RolesServiceError::InvalidExternalId(source) => {
            StatusError::bad_request().brief(format!("invalid roleId: {source}"))
        }
        RolesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Role already exists")
        }
        RolesServiceError::InvalidReference
        | RolesServiceError::MissingRequiredData
        | RolesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid role payload")
        }
        RolesServiceError::NotFound => StatusError::not_found().brief("Role not found"),
        RolesServiceError::Timeout => {
            warn!("role store timed out");

            StatusError::service_unavailable()
        }
        RolesServiceError::Sql(source) => {
            error!("role store failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
