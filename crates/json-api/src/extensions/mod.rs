//! Extension traits

mod depot;
mod list_query;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use list_query::ListQueryExt as _;
pub(crate) use result::ResultExt as _;
