//! Role Records

use jiff::Timestamp;

use crate::{
    ids::TypedId,
    pagination::{Listable, SortField, SortValue},
};

/// Role internal id
pub type RoleId = TypedId<RoleRecord>;

/// Role Record
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRecord {
    pub id: RoleId,

    /// Caller-supplied unique identifier.
    pub role_id: String,

    pub object_id: Option<String>,

    pub name: Option<String>,

    /// Free-form description of what the role grants.
    pub description: Option<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,

    pub deleted_at: Option<Timestamp>,
}

impl Listable for RoleRecord {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static str =
        "id, role_id, object_id, name, description, created_at, updated_at, deleted_at";
    const EXTERNAL_ID: SortField<Self> =
        SortField::text("roleId", "role_id", |role| SortValue::from(role.role_id.as_str()));
    const SORT_FIELDS: &'static [SortField<Self>] = &[
        Self::EXTERNAL_ID,
        SortField::text("name", "COALESCE(name, '')", |role| {
            SortValue::from(role.name.as_deref().unwrap_or_default())
        }),
        SortField::timestamp("createdAt", "created_at", |role| {
            SortValue::from(role.created_at)
        }),
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["role_id", "name"];

    fn external_id(&self) -> &str {
        &self.role_id
    }
}
