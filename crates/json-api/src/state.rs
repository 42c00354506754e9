//! Handler state injected into the depot.

use std::sync::Arc;

use roster_app::{
    context::AppContext,
    domain::{roles::RolesService, tenants::TenantsService},
};

/// Services every handler can reach.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) tenants: Arc<dyn TenantsService>,
    pub(crate) roles: Arc<dyn RolesService>,
}

impl From<AppContext> for State {
    fn from(app: AppContext) -> Self {
        let AppContext { tenants, roles } = app;

        Self { tenants, roles }
    }
}

impl State {
    /// Shared form handed to `affix_state::inject`.
    #[must_use]
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(app.into())
    }
}
