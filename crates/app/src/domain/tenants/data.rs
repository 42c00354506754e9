//! Tenant Data

/// New Tenant Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    /// Unique identifier to create, or to recreate when soft-deleted.
    pub tenant_id: String,

    /// Linked authorization object.
    pub object_id: Option<String>,

    /// Tenant name to persist.
    pub name: Option<String>,
}

/// Tenant Update Data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenantUpdate {
    /// Replacement name. `None` clears it.
    pub name: Option<String>,
}
