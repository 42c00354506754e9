//! Keyset Pagination

pub mod fields;
pub mod params;
pub(crate) mod query;
pub mod value;

pub use fields::{FieldKind, Listable, SortField};
pub use params::{
    Cursor, DEFAULT_LIMIT, ListParams, ListParamsError, ListRequest, MAX_LIMIT, Page, SortOrder,
};
pub use value::SortValue;
