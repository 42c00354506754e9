//! Liveness endpoint.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Liveness reported by `/healthcheck`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Health {
    Ok,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthReport {
    pub(crate) status: Health,

    /// Server build version.
    pub(crate) version: String,
}

/// Reports the server as up. The database is not consulted.
#[endpoint(
    tags("health"),
    summary = "Liveness check",
    responses(
        (status_code = StatusCode::OK, description = "Server is up"),
    ),
)]
pub(crate) async fn handler() -> Json<HealthReport> {
    Json(HealthReport {
        status: Health::Ok,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
