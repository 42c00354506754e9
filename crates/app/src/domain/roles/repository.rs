//! Roles Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};
use tracing::debug;

use crate::{
    database::{Db, StoreError},
    domain::roles::{
        data::{NewRole, RoleUpdate},
        records::{RoleId, RoleRecord},
    },
    pagination::{ListParams, query::build_list_query},
};

const CREATE_ROLE_SQL: &str = include_str!("sql/create_role.sql");
const GET_ROLE_BY_ID_SQL: &str = include_str!("sql/get_role_by_id.sql");
const GET_ROLE_SQL: &str = include_str!("sql/get_role.sql");
const UPDATE_ROLE_SQL: &str = include_str!("sql/update_role.sql");
const DELETE_ROLE_SQL: &str = include_str!("sql/delete_role.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgRolesRepository {
    db: Db,
}

impl PgRolesRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    pub(crate) async fn create_role(&self, role: &NewRole) -> Result<RoleRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, RoleRecord>(CREATE_ROLE_SQL)
                    .bind(&role.role_id)
                    .bind(&role.object_id)
                    .bind(&role.name)
                    .bind(&role.description)
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    pub(crate) async fn get_role_by_id(&self, id: RoleId) -> Result<RoleRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, RoleRecord>(GET_ROLE_BY_ID_SQL)
                    .bind(id.into_i64())
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    pub(crate) async fn get_role(&self, role_id: &str) -> Result<RoleRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, RoleRecord>(GET_ROLE_SQL)
                    .bind(role_id)
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    #[tracing::instrument(
        name = "roles.repository.list_roles",
        skip(self, params),
        fields(
            sort_field = params.sort_field().name(),
            limit = params.limit(),
            row_count = tracing::field::Empty
        ),
        err
    )]
    pub(crate) async fn list_roles(
        &self,
        params: &ListParams<RoleRecord>,
    ) -> Result<Vec<RoleRecord>, StoreError> {
        let mut builder = build_list_query(params);

        let roles = self
            .db
            .timed(builder.build_query_as::<RoleRecord>().fetch_all(self.db.pool()))
            .await?;

        tracing::Span::current().record("row_count", roles.len());

        debug!(row_count = roles.len(), "listed roles");

        Ok(roles)
    }

    pub(crate) async fn update_role(
        &self,
        role_id: &str,
        update: RoleUpdate,
    ) -> Result<RoleRecord, StoreError> {
        self.db
            .timed(
                query_as::<Postgres, RoleRecord>(UPDATE_ROLE_SQL)
                    .bind(role_id)
                    .bind(update.name)
                    .bind(update.description)
                    .fetch_one(self.db.pool()),
            )
            .await
    }

    pub(crate) async fn delete_role(&self, role_id: &str) -> Result<u64, StoreError> {
        let result = self
            .db
            .timed(query(DELETE_ROLE_SQL).bind(role_id).execute(self.db.pool()))
            .await?;

        Ok(result.rows_affected())
    }
}

impl<'r> FromRow<'r, PgRow> for RoleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: RoleId::from_i64(row.try_get("id")?),
            role_id: row.try_get("role_id")?,
            object_id: row.try_get("object_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
