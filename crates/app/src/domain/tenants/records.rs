//! Tenant Records

use jiff::Timestamp;

use crate::{
    ids::TypedId,
    pagination::{Listable, SortField, SortValue},
};

/// Tenant internal id
pub type TenantId = TypedId<TenantRecord>;

/// Tenant Record
#[derive(Debug, Clone, PartialEq)]
pub struct TenantRecord {
    /// Store-assigned surrogate key.
    pub id: TenantId,

    /// Caller-supplied unique identifier.
    pub tenant_id: String,

    /// Linked authorization object, if any.
    pub object_id: Option<String>,

    /// Human-readable tenant name.
    pub name: Option<String>,

    /// Creation timestamp, reset when a deleted tenant is recreated.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,

    /// Soft-delete timestamp when deleted.
    pub deleted_at: Option<Timestamp>,
}

impl Listable for TenantRecord {
    const TABLE: &'static str = "tenants";
    const COLUMNS: &'static str =
        "id, tenant_id, object_id, name, created_at, updated_at, deleted_at";
    const EXTERNAL_ID: SortField<Self> = SortField::text("tenantId", "tenant_id", |tenant| {
        SortValue::from(tenant.tenant_id.as_str())
    });
    const SORT_FIELDS: &'static [SortField<Self>] = &[
        Self::EXTERNAL_ID,
        SortField::text("name", "COALESCE(name, '')", |tenant| {
            SortValue::from(tenant.name.as_deref().unwrap_or_default())
        }),
        SortField::timestamp("createdAt", "created_at", |tenant| {
            SortValue::from(tenant.created_at)
        }),
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["tenant_id", "name"];

    fn external_id(&self) -> &str {
        &self.tenant_id
    }
}
