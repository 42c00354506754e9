//! App Router

use salvo::Router;

use crate::{healthcheck, roles, tenants};

/// Healthcheck plus the versioned tenant and role resources.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("v1")
                .push(
                    Router::with_path("tenants")
                        .get(tenants::index::handler)
                        .post(tenants::create::handler)
                        .push(
                            Router::with_path("{tenant_id}")
                                .get(tenants::get::handler)
                                .post(tenants::update::handler)
                                .put(tenants::update::handler)
                                .delete(tenants::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("roles")
                        .get(roles::index::handler)
                        .post(roles::create::handler)
                        .push(
                            Router::with_path("{role_id}")
                                .get(roles::get::handler)
                                .post(roles::update::handler)
                                .put(roles::update::handler)
                                .delete(roles::delete::handler),
                        ),
                ),
        )
}
