//! Update Tenant Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use roster_app::domain::tenants::data::TenantUpdate;

use crate::{
    extensions::*,
    tenants::{TenantResponse, errors::into_status_error},
};

/// Update Tenant Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTenantRequest {
    /// Replacement name; omitting it clears the name
    pub name: Option<String>,
}

impl From<UpdateTenantRequest> for TenantUpdate {
    fn from(request: UpdateTenantRequest) -> Self {
        TenantUpdate { name: request.name }
    }
}

/// Tenant Update Handler
#[endpoint(
    tags("tenants"),
    summary = "Update Tenant",
    responses(
        (status_code = StatusCode::OK, description = "Tenant updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Tenant not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "tenants.update",
    skip(tenant_id, json, depot),
    fields(tenant = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    tenant_id: PathParam<String>,
    json: JsonBody<UpdateTenantRequest>,
    depot: &mut Depot,
) -> Result<Json<TenantResponse>, StatusError> {
    let state = depot.state()?;
    let tenant_id = tenant_id.into_inner();

    tracing::Span::current().record("tenant", tenant_id.as_str());

    let tenant = state
        .tenants
        .update_tenant(&tenant_id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(tenant.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use roster_app::domain::tenants::{MockTenantsService, TenantsServiceError};

    use crate::test_helpers::{make_tenant, tenants_service};

    use super::*;

    fn make_service(tenants: MockTenantsService) -> Service {
        tenants_service(
            tenants,
            Router::with_path("tenants/{tenant_id}")
                .post(handler)
                .put(handler),
        )
    }

    #[tokio::test]
    async fn put_updates_name() -> TestResult {
        let mut tenants = MockTenantsService::new();

        tenants
            .expect_update_tenant()
            .once()
            .withf(|tenant_id, update| {
                tenant_id == "acme"
                    && *update
                        == TenantUpdate {
                            name: Some("Acme Corp".to_string()),
                        }
            })
            .return_once(|_, update| {
                let mut tenant = make_tenant("acme");
                tenant.name = update.name;

                Ok(tenant)
            });

        let response: TenantResponse = TestClient::put("http://example.com/tenants/acme")
            .json(&json!({ "name": "Acme Corp" }))
            .send(&make_service(tenants))
            .await
            .take_json()
            .await?;

        assert_eq!(response.name.as_deref(), Some("Acme Corp"));

        Ok(())
    }

    #[tokio::test]
    async fn post_is_accepted_as_update() -> TestResult {
        let mut tenants = MockTenantsService::new();

        tenants
            .expect_update_tenant()
            .once()
            .withf(|tenant_id, update| tenant_id == "acme" && update.name.is_none())
            .return_once(|_, _| Ok(make_tenant("acme")));

        let res = TestClient::post("http://example.com/tenants/acme")
            .json(&json!({}))
            .send(&make_service(tenants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn missing_tenant_returns_404() -> TestResult {
        let mut tenants = MockTenantsService::new();

        tenants
            .expect_update_tenant()
            .once()
            .return_once(|_, _| Err(TenantsServiceError::NotFound));

        let res = TestClient::put("http://example.com/tenants/gone")
            .json(&json!({ "name": "Nobody" }))
            .send(&make_service(tenants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
