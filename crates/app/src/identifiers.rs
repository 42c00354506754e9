//! External identifiers

use thiserror::Error;

/// Longest external id accepted.
pub const MAX_EXTERNAL_ID_LEN: usize = 64;

/// Why an external id was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalIdError {
    /// Zero-length id.
    #[error("id must not be empty")]
    Empty,

    /// Longer than [`MAX_EXTERNAL_ID_LEN`].
    #[error("id must be at most {MAX_EXTERNAL_ID_LEN} characters")]
    TooLong,

    /// Contains a character outside the allowed set.
    #[error("id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Checks a caller-supplied external id: 1 to 64 characters drawn from
/// letters, digits and `_ - . @ | :`.
///
/// # Errors
///
/// Returns an [`ExternalIdError`] describing the first problem found.
pub fn validate_external_id(id: &str) -> Result<(), ExternalIdError> {
    if id.is_empty() {
        return Err(ExternalIdError::Empty);
    }

    if id.chars().count() > MAX_EXTERNAL_ID_LEN {
        return Err(ExternalIdError::TooLong);
    }

    match id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '@' | '|' | ':')))
    {
        Some(c) => Err(ExternalIdError::InvalidCharacter(c)),
        None => Ok(()),
    }
}
