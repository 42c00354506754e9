//! Sort values

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

use crate::pagination::fields::FieldKind;

/// Value of a sort field at one row, as carried by a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    /// Value of a text field.
    Text(String),

    /// Value of a timestamp field.
    Timestamp(Timestamp),
}

impl SortValue {
    /// Decodes a cursor value received as a string for a field of `kind`.
    pub(crate) fn decode(kind: FieldKind, raw: &str) -> Option<Self> {
        match kind {
            FieldKind::Text => Some(Self::Text(raw.to_owned())),
            FieldKind::Timestamp => raw.parse::<Timestamp>().ok().map(Self::Timestamp),
        }
    }
}

impl Display for SortValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Timestamp(timestamp) => Display::fmt(timestamp, f),
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Timestamp> for SortValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}
