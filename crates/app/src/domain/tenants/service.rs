//! Tenants service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::tenants::{
        data::{NewTenant, TenantUpdate},
        errors::TenantsServiceError,
        records::{TenantId, TenantRecord},
        repository::PgTenantsRepository,
    },
    identifiers::validate_external_id,
    pagination::ListParams,
};

#[derive(Debug, Clone)]
pub struct PgTenantsService {
    repository: PgTenantsRepository,
}

impl PgTenantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: PgTenantsRepository::new(db),
        }
    }
}

#[async_trait]
impl TenantsService for PgTenantsService {
    #[tracing::instrument(
        name = "tenants.service.create_tenant",
        skip(self, tenant),
        fields(tenant_id = %tenant.tenant_id),
        err
    )]
    async fn create_tenant(&self, tenant: NewTenant) -> Result<TenantRecord, TenantsServiceError> {
        validate_external_id(&tenant.tenant_id)?;

        let record = self.repository.create_tenant(&tenant).await?;

        info!(internal_id = %record.id, "created tenant");

        Ok(record)
    }

    async fn get_tenant(&self, tenant_id: &str) -> Result<TenantRecord, TenantsServiceError> {
        self.repository
            .get_tenant(tenant_id)
            .await
            .map_err(Into::into)
    }

    async fn get_tenant_by_id(&self, id: TenantId) -> Result<TenantRecord, TenantsServiceError> {
        self.repository
            .get_tenant_by_id(id)
            .await
            .map_err(Into::into)
    }

    async fn list_tenants(
        &self,
        params: ListParams<TenantRecord>,
    ) -> Result<Vec<TenantRecord>, TenantsServiceError> {
        self.repository
            .list_tenants(&params)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(
        name = "tenants.service.update_tenant",
        skip(self, update),
        err
    )]
    async fn update_tenant(
        &self,
        tenant_id: &str,
        update: TenantUpdate,
    ) -> Result<TenantRecord, TenantsServiceError> {
        self.repository
            .update_tenant(tenant_id, update)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(name = "tenants.service.delete_tenant", skip(self), err)]
    async fn delete_tenant(&self, tenant_id: &str) -> Result<(), TenantsServiceError> {
        let rows_affected = self.repository.delete_tenant(tenant_id).await?;

        if rows_affected == 0 {
            return Err(TenantsServiceError::NotFound);
        }

        info!("deleted tenant");

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Tenant persistence operations.
pub trait TenantsService: Send + Sync {
    /// Creates a tenant, recreating it in place if it was soft-deleted.
    async fn create_tenant(&self, tenant: NewTenant) -> Result<TenantRecord, TenantsServiceError>;

    /// Retrieves a live tenant by its tenant id.
    async fn get_tenant(&self, tenant_id: &str) -> Result<TenantRecord, TenantsServiceError>;

    /// Retrieves a live tenant by its internal id.
    async fn get_tenant_by_id(&self, id: TenantId) -> Result<TenantRecord, TenantsServiceError>;

    /// Lists one page of live tenants.
    async fn list_tenants(
        &self,
        params: ListParams<TenantRecord>,
    ) -> Result<Vec<TenantRecord>, TenantsServiceError>;

    /// Updates a live tenant's mutable fields.
    async fn update_tenant(
        &self,
        tenant_id: &str,
        update: TenantUpdate,
    ) -> Result<TenantRecord, TenantsServiceError>;

    /// Soft-deletes a live tenant.
    async fn delete_tenant(&self, tenant_id: &str) -> Result<(), TenantsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        pagination::{ListRequest, Page},
        test::{TestContext, helpers::create_tenant},
    };

    use super::*;

    fn tenant_ids(tenants: &[TenantRecord]) -> Vec<&str> {
        tenants.iter().map(|t| t.tenant_id.as_str()).collect()
    }

    fn params(request: ListRequest) -> Result<ListParams<TenantRecord>, TenantsServiceError> {
        Ok(ListParams::parse(request)?)
    }

    #[tokio::test]
    async fn create_tenant_returns_full_record() -> TestResult {
        let ctx = TestContext::new().await;

        let before = Timestamp::now();

        let tenant = ctx
            .tenants
            .create_tenant(NewTenant {
                tenant_id: "acme".to_string(),
                object_id: Some("obj-1".to_string()),
                name: Some("Acme Corp".to_string()),
            })
            .await?;

        assert_eq!(tenant.tenant_id, "acme");
        assert_eq!(tenant.object_id.as_deref(), Some("obj-1"));
        assert_eq!(tenant.name.as_deref(), Some("Acme Corp"));
        assert!(tenant.created_at >= before);
        assert!(tenant.deleted_at.is_none());

        let by_id = ctx.tenants.get_tenant_by_id(tenant.id).await?;

        assert_eq!(by_id, tenant);

        Ok(())
    }

    #[tokio::test]
    async fn create_tenant_rejects_malformed_ids() {
        let ctx = TestContext::new().await;

        let result = ctx
            .tenants
            .create_tenant(NewTenant {
                tenant_id: "has space".to_string(),
                object_id: None,
                name: None,
            })
            .await;

        assert!(
            matches!(result, Err(TenantsServiceError::InvalidExternalId(_))),
            "expected InvalidExternalId, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_tenant_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.tenants.get_tenant("missing").await;

        assert!(
            matches!(result, Err(TenantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deleted_tenant_is_hidden_from_every_read() -> TestResult {
        let ctx = TestContext::new().await;

        let tenant = create_tenant(&ctx, "gone", Some("Gone")).await?;
        create_tenant(&ctx, "kept", Some("Kept")).await?;

        ctx.tenants.delete_tenant("gone").await?;

        let by_external = ctx.tenants.get_tenant("gone").await;
        let by_internal = ctx.tenants.get_tenant_by_id(tenant.id).await;
        let listed = ctx.tenants.list_tenants(ListParams::default()).await?;

        assert!(matches!(by_external, Err(TenantsServiceError::NotFound)));
        assert!(matches!(by_internal, Err(TenantsServiceError::NotFound)));
        assert_eq!(tenant_ids(&listed), ["kept"]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_tenant_keeps_row_with_deleted_at() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "archived", None).await?;

        ctx.tenants.delete_tenant("archived").await?;

        let deleted: bool = sqlx::query_scalar(
            "SELECT deleted_at IS NOT NULL FROM tenants WHERE tenant_id = 'archived'",
        )
        .fetch_one(ctx.db.pool())
        .await?;

        assert!(deleted);

        Ok(())
    }

    #[tokio::test]
    async fn delete_tenant_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "acme", None).await?;

        ctx.tenants.delete_tenant("acme").await?;

        let result = ctx.tenants.delete_tenant("acme").await;

        assert!(
            matches!(result, Err(TenantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_after_delete_recreates_tenant() -> TestResult {
        let ctx = TestContext::new().await;

        let original = ctx
            .tenants
            .create_tenant(NewTenant {
                tenant_id: "acme".to_string(),
                object_id: Some("obj-1".to_string()),
                name: Some("Old".to_string()),
            })
            .await?;

        ctx.tenants.delete_tenant("acme").await?;

        let recreated = ctx
            .tenants
            .create_tenant(NewTenant {
                tenant_id: "acme".to_string(),
                object_id: None,
                name: Some("New".to_string()),
            })
            .await?;

        assert_eq!(recreated.id, original.id);
        assert!(recreated.created_at > original.created_at);
        assert_eq!(recreated.object_id, None);
        assert_eq!(recreated.name.as_deref(), Some("New"));
        assert!(recreated.deleted_at.is_none());

        let fetched = ctx.tenants.get_tenant("acme").await?;

        assert_eq!(fetched, recreated);

        Ok(())
    }

    #[tokio::test]
    async fn update_tenant_replaces_name_and_bumps_updated_at() -> TestResult {
        let ctx = TestContext::new().await;

        let tenant = create_tenant(&ctx, "acme", Some("Acme")).await?;

        let updated = ctx
            .tenants
            .update_tenant(
                "acme",
                TenantUpdate {
                    name: Some("Acme Inc".to_string()),
                },
            )
            .await?;

        assert_eq!(updated.id, tenant.id);
        assert_eq!(updated.name.as_deref(), Some("Acme Inc"));
        assert_eq!(updated.created_at, tenant.created_at);
        assert!(updated.updated_at > tenant.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_deleted_tenant_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "acme", Some("Acme")).await?;
        ctx.tenants.delete_tenant("acme").await?;

        let result = ctx
            .tenants
            .update_tenant("acme", TenantUpdate::default())
            .await;

        assert!(
            matches!(result, Err(TenantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_tenants_pages_with_tie_break() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "c", Some("2")).await?;
        create_tenant(&ctx, "b", Some("1")).await?;
        create_tenant(&ctx, "a", Some("1")).await?;

        let first = params(ListRequest {
            sort_by: Some("name".to_string()),
            limit: Some(2),
            ..ListRequest::default()
        })?;

        let page = ctx.tenants.list_tenants(first).await?;

        assert_eq!(tenant_ids(&page), ["a", "b"]);

        let next = params(ListRequest {
            sort_by: Some("name".to_string()),
            after_id: Some("b".to_string()),
            after_value: Some("1".to_string()),
            limit: Some(2),
            ..ListRequest::default()
        })?;

        let page = ctx.tenants.list_tenants(next).await?;

        assert_eq!(tenant_ids(&page), ["c"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_tenants_descending_ties_follow_sort_order() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "a", Some("same")).await?;
        create_tenant(&ctx, "b", Some("same")).await?;
        create_tenant(&ctx, "c", Some("other")).await?;

        let tenants = ctx
            .tenants
            .list_tenants(params(ListRequest {
                sort_by: Some("name".to_string()),
                sort_order: Some("desc".to_string()),
                ..ListRequest::default()
            })?)
            .await?;

        assert_eq!(tenant_ids(&tenants), ["b", "a", "c"]);

        Ok(())
    }

    #[tokio::test]
    async fn forward_paging_visits_every_tenant_once() -> TestResult {
        let ctx = TestContext::new().await;

        let names = [
            Some("delta"),
            None,
            Some("alpha"),
            Some("charlie"),
            Some("alpha"),
            None,
            Some("bravo"),
        ];

        for (i, name) in names.iter().enumerate() {
            create_tenant(&ctx, &format!("t-{i}"), *name).await?;
        }

        let everything = ctx
            .tenants
            .list_tenants(params(ListRequest {
                sort_by: Some("name".to_string()),
                ..ListRequest::default()
            })?)
            .await?;

        assert_eq!(everything.len(), names.len());

        for limit in 1..=names.len() {
            let mut page_params = params(ListRequest {
                sort_by: Some("name".to_string()),
                limit: Some(u32::try_from(limit)?),
                ..ListRequest::default()
            })?;

            let mut visited = Vec::new();

            loop {
                let page = ctx.tenants.list_tenants(page_params.clone()).await?;

                let Some(last) = page.last() else {
                    break;
                };

                page_params = page_params.after(last);
                visited.extend(page);
            }

            assert_eq!(visited, everything, "limit {limit} should visit every row once");
        }

        Ok(())
    }

    #[tokio::test]
    async fn forward_paging_tolerates_writes_between_pages() -> TestResult {
        let ctx = TestContext::new().await;

        for id in ["t-1", "t-2", "t-3", "t-4", "t-5", "t-6"] {
            create_tenant(&ctx, id, None).await?;
        }

        let mut page_params = params(ListRequest {
            limit: Some(2),
            ..ListRequest::default()
        })?;

        let mut visited = Vec::new();

        loop {
            let page = ctx.tenants.list_tenants(page_params.clone()).await?;

            let Some(last) = page.last() else {
                break;
            };

            page_params = page_params.after(last);

            if visited.is_empty() {
                // Behind the cursor, ahead of it, and an unvisited deletion.
                create_tenant(&ctx, "t-0", None).await?;
                create_tenant(&ctx, "t-35", None).await?;
                ctx.tenants.delete_tenant("t-5").await?;
            }

            visited.extend(page.into_iter().map(|t| t.tenant_id));
        }

        assert_eq!(visited, ["t-1", "t-2", "t-3", "t-35", "t-4", "t-6"]);

        Ok(())
    }

    #[tokio::test]
    async fn backward_paging_reverses_forward_pages() -> TestResult {
        let ctx = TestContext::new().await;

        for (id, name) in [("a", "x"), ("b", "y"), ("c", "y"), ("d", "z"), ("e", "z")] {
            create_tenant(&ctx, id, Some(name)).await?;
        }

        let forward = params(ListRequest {
            sort_by: Some("name".to_string()),
            limit: Some(5),
            ..ListRequest::default()
        })?;

        let all = ctx.tenants.list_tenants(forward.clone()).await?;

        let Some(last) = all.last() else {
            return Err("expected tenants".into());
        };

        let backward = forward.before(last);

        assert!(matches!(backward.page(), Page::Before(_)));

        let previous = ctx.tenants.list_tenants(backward).await?;

        assert_eq!(tenant_ids(&previous), ["d", "c", "b", "a"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_tenants_by_created_at_uses_timestamp_cursor() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "first", None).await?;
        create_tenant(&ctx, "second", None).await?;
        create_tenant(&ctx, "third", None).await?;

        let first_page = params(ListRequest {
            sort_by: Some("createdAt".to_string()),
            limit: Some(1),
            ..ListRequest::default()
        })?;

        let page = ctx.tenants.list_tenants(first_page.clone()).await?;

        assert_eq!(tenant_ids(&page), ["first"]);

        let Some(last) = page.last() else {
            return Err("expected a tenant".into());
        };

        let rest = ctx
            .tenants
            .list_tenants(params(ListRequest {
                sort_by: Some("createdAt".to_string()),
                after_id: Some(last.tenant_id.clone()),
                after_value: Some(last.created_at.to_string()),
                ..ListRequest::default()
            })?)
            .await?;

        assert_eq!(tenant_ids(&rest), ["second", "third"]);

        Ok(())
    }

    #[tokio::test]
    async fn search_filters_by_substring() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "t-1", Some("tenant-a")).await?;
        create_tenant(&ctx, "t-2", Some("other")).await?;
        create_tenant(&ctx, "t-3", Some("tenant-b")).await?;

        let tenants = ctx
            .tenants
            .list_tenants(params(ListRequest {
                query: Some("ten".to_string()),
                sort_by: Some("name".to_string()),
                ..ListRequest::default()
            })?)
            .await?;

        let names: Vec<_> = tenants.iter().filter_map(|t| t.name.as_deref()).collect();

        assert_eq!(names, ["tenant-a", "tenant-b"]);

        Ok(())
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() -> TestResult {
        let ctx = TestContext::new().await;

        create_tenant(&ctx, "t-1", Some("50% off")).await?;
        create_tenant(&ctx, "t-2", Some("500 off")).await?;

        let tenants = ctx
            .tenants
            .list_tenants(params(ListRequest {
                query: Some("0%".to_string()),
                ..ListRequest::default()
            })?)
            .await?;

        assert_eq!(tenant_ids(&tenants), ["t-1"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_tenants_empty_store_returns_empty_page() -> TestResult {
        let ctx = TestContext::new().await;

        let tenants = ctx.tenants.list_tenants(ListParams::default()).await?;

        assert!(tenants.is_empty());

        Ok(())
    }
}
