//! Role Data

/// New Role Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    /// Unique identifier to create, or to recreate when soft-deleted.
    pub role_id: String,

    pub object_id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,
}

/// Role Update Data
///
/// Both fields replace the stored values; `None` clears them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleUpdate {
    pub name: Option<String>,

    pub description: Option<String>,
}
