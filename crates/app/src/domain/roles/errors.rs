//! Roles service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{database::StoreError, identifiers::ExternalIdError, pagination::ListParamsError};

#[derive(Debug, Error)]
pub enum RolesServiceError {
    #[error("invalid list parameters: {0}")]
    InvalidParameter(#[from] ListParamsError),

    #[error("invalid role id: {0}")]
    InvalidExternalId(#[from] ExternalIdError),

    #[error("role already exists")]
    AlreadyExists,

    #[error("role not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage timed out")]
    Timeout,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for RolesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<StoreError> for RolesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Timeout => Self::Timeout,
            StoreError::Sql(error) => error.into(),
        }
    }
}
