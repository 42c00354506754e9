//! Tenants Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};
use tracing::debug;

use crate::{
    database::{Db, StoreError},
    domain::tenants::{
        data::{NewTenant, TenantUpdate},
        records::{TenantId, TenantRecord},
    },
    pagination::{ListParams, query::build_list_query},
};

const CREATE_TENANT_SQL: &str = include_str!("sql/create_tenant.sql");
const GET_TENANT_BY_ID_SQL: &str = include_str!("sql/get_tenant_by_id.sql");
const GET_TENANT_SQL: &str = include_str!("sql/get_tenant.sql");
const UPDATE_TENANT_SQL: &str = include_str!("sql/update_tenant.sql");
const DELETE_TENANT_SQL: &str = include_str!("sql/delete_tenant.sql");

#[derive(Debug, Clone)]
/// PostgreSQL-backed tenants repository.
pub(crate) struct PgTenantsRepository {
    db: Db,
}

impl PgTenantsRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    /// Inserts the tenant, or overwrites and revives the row already holding
    /// its tenant id.
    pub(crate) async fn create_tenant(&self, tenant: &NewTenant) -> Result<TenantRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, TenantRecord>(CREATE_TENANT_SQL)
                    .bind(&tenant.tenant_id)
                    .bind(&tenant.object_id)
                    .bind(&tenant.name)
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    pub(crate) async fn get_tenant_by_id(&self, id: TenantId) -> Result<TenantRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, TenantRecord>(GET_TENANT_BY_ID_SQL)
                    .bind(id.into_i64())
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    pub(crate) async fn get_tenant(&self, tenant_id: &str) -> Result<TenantRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, TenantRecord>(GET_TENANT_SQL)
                    .bind(tenant_id)
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    #[tracing::instrument(
        name = "tenants.repository.list_tenants",
        skip(self, params),
        fields(
            sort_field = params.sort_field().name(),
            limit = params.limit(),
            row_count = tracing::field::Empty
        ),
        err
    )]
    pub(crate) async fn list_tenants(
        &self,
        params: &ListParams<TenantRecord>,
    ) -> Result<Vec<TenantRecord>, StoreError> {
        let mut builder = build_list_query(params);

        let tenants = self
            .db
            .timed(
                builder
                    .build_query_as::<TenantRecord>()
                    .fetch_all(self.db.pool()),
            )
            .await?;

        tracing::Span::current().record("row_count", tenants.len());

        debug!(row_count = tenants.len(), "listed tenants");

        Ok(tenants)
    }

    pub(crate) async fn update_tenant(
        &self,
        tenant_id: &str,
        update: TenantUpdate,
    ) -> Result<TenantRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, TenantRecord>(UPDATE_TENANT_SQL)
                    .bind(tenant_id)
                    .bind(update.name)
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    pub(crate) async fn delete_tenant(&self, tenant_id: &str) -> Result<u64, StoreError> {
        let result = self
            .db
            .timed(query(DELETE_TENANT_SQL).bind(tenant_id).execute(self.db.pool()))
            .await?;

        Ok(result.rows_affected())
    }
}

impl<'r> FromRow<'r, PgRow> for TenantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: TenantId::from_i64(row.try_get("id")?),
            tenant_id: row.try_get("tenant_id")?,
            object_id: row.try_get("object_id")?,
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
