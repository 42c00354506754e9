//! List parameters

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

use crate::pagination::{
    fields::{Listable, SortField},
    value::SortValue,
};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest page size a caller may ask for.
pub const MAX_LIMIT: u32 = 1000;

/// Invalid list request parameters. Raised before any query is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListParamsError {
    /// `sortBy` names a field outside the allow-list.
    #[error("unknown sort field \"{0}\"")]
    UnknownSortField(String),

    /// `sortOrder` is neither ASC nor DESC.
    #[error("invalid sort order \"{0}\", expected ASC or DESC")]
    InvalidSortOrder(String),

    /// `limit` is zero or above [`MAX_LIMIT`].
    #[error("limit must be between 1 and {max}, got {limit}")]
    InvalidLimit { limit: u32, max: u32 },

    /// Forward and backward cursors in one request.
    #[error("afterId/afterValue and beforeId/beforeValue cannot be combined")]
    ConflictingCursors,

    /// A cursor value arrived without its id.
    #[error("{value_param} requires {id_param}")]
    MissingCursorId {
        id_param: &'static str,
        value_param: &'static str,
    },

    /// A cursor id arrived without the value a two-key ordering needs.
    #[error("{value_param} is required when sorting by {field}")]
    MissingCursorValue {
        value_param: &'static str,
        field: &'static str,
    },

    /// A cursor value does not decode for the sort field's kind.
    #[error("invalid {value_param} \"{value}\" for sort field {field}")]
    InvalidCursorValue {
        value_param: &'static str,
        field: &'static str,
        value: String,
    },
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,

    /// Descending.
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub(crate) const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ListParamsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ListParamsError::InvalidSortOrder(value.to_owned()))
        }
    }
}

/// A list request as decoded by a transport, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    /// Substring to search for.
    pub query: Option<String>,

    /// Logical sort field name.
    pub sort_by: Option<String>,

    /// `ASC` or `DESC`, any case.
    pub sort_order: Option<String>,

    /// External id of the row to continue after.
    pub after_id: Option<String>,

    /// Sort value of the row to continue after.
    pub after_value: Option<String>,

    /// External id of the row to page back from.
    pub before_id: Option<String>,

    /// Sort value of the row to page back from.
    pub before_value: Option<String>,

    /// Page size.
    pub limit: Option<u32>,
}

/// Position of a row in the effective total order: its external id plus the
/// sort field's value. `value` is `None` when the external id is the only key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// External id of the row.
    pub id: String,

    /// Sort field value of the row.
    pub value: Option<SortValue>,
}

/// Which slice of the ordering a list call asks for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// From the start of the ordering.
    #[default]
    First,

    /// Rows strictly after the cursor, in the requested order.
    After(Cursor),

    /// Rows strictly before the cursor, nearest first.
    Before(Cursor),
}

#[derive(Clone, Copy)]
enum CursorSide {
    After,
    Before,
}

impl CursorSide {
    const fn id_param(self) -> &'static str {
        match self {
            Self::After => "afterId",
            Self::Before => "beforeId",
        }
    }

    const fn value_param(self) -> &'static str {
        match self {
            Self::After => "afterValue",
            Self::Before => "beforeValue",
        }
    }
}

/// Validated pagination, search and sort parameters for listing `R`.
pub struct ListParams<R> {
    query: Option<String>,
    sort_field: SortField<R>,
    sort_order: SortOrder,
    page: Page,
    limit: u32,
}

impl<R: Listable> ListParams<R> {
    /// Validates a raw request against `R`'s sort allow-list.
    ///
    /// # Errors
    ///
    /// Returns a [`ListParamsError`] when the sort field is not allow-listed,
    /// the sort order or limit is out of range, both cursors are present, or a
    /// cursor is incomplete or carries a value that does not decode.
    pub fn parse(request: ListRequest) -> Result<Self, ListParamsError> {
        let ListRequest {
            query,
            sort_by,
            sort_order,
            after_id,
            after_value,
            before_id,
            before_value,
            limit,
        } = request;

        let (after_id, after_value) = normalize_cursor(after_id, after_value);
        let (before_id, before_value) = normalize_cursor(before_id, before_value);

        let has_after = after_id.is_some() || after_value.is_some();
        let has_before = before_id.is_some() || before_value.is_some();

        if has_after && has_before {
            return Err(ListParamsError::ConflictingCursors);
        }

        let sort_field = match sort_by.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => R::sort_field(name)
                .ok_or_else(|| ListParamsError::UnknownSortField(name.to_owned()))?,
            None => R::EXTERNAL_ID,
        };

        let sort_order = match sort_order.as_deref().filter(|order| !order.is_empty()) {
            Some(order) => order.parse()?,
            None => SortOrder::default(),
        };

        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(limit) if limit == 0 || limit > MAX_LIMIT => {
                return Err(ListParamsError::InvalidLimit {
                    limit,
                    max: MAX_LIMIT,
                });
            }
            Some(limit) => limit,
        };

        let page = if has_after {
            decode_cursor(CursorSide::After, sort_field, after_id, after_value)?
                .map_or(Page::First, Page::After)
        } else {
            decode_cursor(CursorSide::Before, sort_field, before_id, before_value)?
                .map_or(Page::First, Page::Before)
        };

        Ok(Self {
            query: query.filter(|query| !query.is_empty()),
            sort_field,
            sort_order,
            page,
            limit,
        })
    }

    /// Parameters for the page following `record` in the same ordering.
    #[must_use]
    pub fn after(&self, record: &R) -> Self {
        self.with_page(Page::After(self.cursor_for(record)))
    }

    /// Parameters for the page preceding `record` in the same ordering.
    #[must_use]
    pub fn before(&self, record: &R) -> Self {
        self.with_page(Page::Before(self.cursor_for(record)))
    }

    /// Whether the ordering collapses to the external id alone.
    pub fn is_single_key(&self) -> bool {
        self.sort_field == R::EXTERNAL_ID
    }

    fn cursor_for(&self, record: &R) -> Cursor {
        Cursor {
            id: record.external_id().to_owned(),
            value: (!self.is_single_key()).then(|| self.sort_field.value_of(record)),
        }
    }

    fn with_page(&self, page: Page) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

impl<R> ListParams<R> {
    /// Substring filter, `None` when not filtering.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Primary ordering field.
    pub fn sort_field(&self) -> SortField<R> {
        self.sort_field
    }

    /// Requested direction.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Slice of the ordering to fetch.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Maximum rows to return.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl<R: Listable> Default for ListParams<R> {
    fn default() -> Self {
        Self {
            query: None,
            sort_field: R::EXTERNAL_ID,
            sort_order: SortOrder::Asc,
            page: Page::First,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl<R> Clone for ListParams<R> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            sort_field: self.sort_field,
            sort_order: self.sort_order,
            page: self.page.clone(),
            limit: self.limit,
        }
    }
}

impl<R> Debug for ListParams<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ListParams")
            .field("query", &self.query)
            .field("sort_field", &self.sort_field.name())
            .field("sort_order", &self.sort_order)
            .field("page", &self.page)
            .field("limit", &self.limit)
            .finish()
    }
}

impl<R> PartialEq for ListParams<R> {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
            && self.sort_field == other.sort_field
            && self.sort_order == other.sort_order
            && self.page == other.page
            && self.limit == other.limit
    }
}

/// Blank ids count as absent. A blank value is only meaningful next to an id,
/// where it is the text sort value of an unnamed row.
fn normalize_cursor(
    id: Option<String>,
    value: Option<String>,
) -> (Option<String>, Option<String>) {
    let id = id.filter(|id| !id.is_empty());
    let value = value.filter(|value| id.is_some() || !value.is_empty());

    (id, value)
}

fn decode_cursor<R: Listable>(
    side: CursorSide,
    field: SortField<R>,
    id: Option<String>,
    value: Option<String>,
) -> Result<Option<Cursor>, ListParamsError> {
    match (id, value) {
        (None, None) => Ok(None),
        (None, Some(_)) => Err(ListParamsError::MissingCursorId {
            id_param: side.id_param(),
            value_param: side.value_param(),
        }),
        (Some(id), _) if field == R::EXTERNAL_ID => Ok(Some(Cursor { id, value: None })),
        (Some(_), None) => Err(ListParamsError::MissingCursorValue {
            value_param: side.value_param(),
            field: field.name(),
        }),
        (Some(id), Some(raw)) => {
            let value = SortValue::decode(field.kind(), &raw).ok_or_else(|| {
                ListParamsError::InvalidCursorValue {
                    value_param: side.value_param(),
                    field: field.name(),
                    value: raw.clone(),
                }
            })?;

            Ok(Some(Cursor {
                id,
                value: Some(value),
            }))
        }
    }
}
