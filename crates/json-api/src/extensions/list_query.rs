//! List query string parsing.

use salvo::{Request, prelude::StatusError};

use roster_app::pagination::ListRequest;

use crate::extensions::*;

pub(crate) trait ListQueryExt {
    /// Decode paging, sorting and search parameters from the query string.
    fn list_request(&mut self) -> Result<ListRequest, StatusError>;
}

impl ListQueryExt for Request {
    fn list_request(&mut self) -> Result<ListRequest, StatusError> {
        self.parse_queries::<ListRequest>()
            .or_400("could not parse list query parameters")
    }
}
