//! Access to the injected [`State`].

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

pub(crate) trait DepotExt {
    /// The shared handler state, or a 500 when the router never injected it.
    fn state(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("handler state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
