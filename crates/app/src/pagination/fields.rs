//! Sortable field allow-lists

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::pagination::value::SortValue;

/// How cursor values for a field are decoded and bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Compared as text.
    Text,

    /// Compared as a point in time. Cursor values are RFC 3339 strings.
    Timestamp,
}

/// One entry of a resource's sort allow-list.
///
/// The logical `name` is what callers send; the `expression` is the only SQL
/// that ever reaches the ORDER BY and cursor clauses for this field.
pub struct SortField<R> {
    name: &'static str,
    expression: &'static str,
    kind: FieldKind,
    value: fn(&R) -> SortValue,
}

impl<R> SortField<R> {
    /// A text field sorted on `expression`.
    pub const fn text(
        name: &'static str,
        expression: &'static str,
        value: fn(&R) -> SortValue,
    ) -> Self {
        Self {
            name,
            expression,
            kind: FieldKind::Text,
            value,
        }
    }

    /// A timestamp field sorted on `expression`.
    pub const fn timestamp(
        name: &'static str,
        expression: &'static str,
        value: fn(&R) -> SortValue,
    ) -> Self {
        Self {
            name,
            expression,
            kind: FieldKind::Timestamp,
            value,
        }
    }

    /// Logical field name accepted from callers, e.g. `createdAt`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// SQL expression the field sorts and compares on.
    pub const fn expression(&self) -> &'static str {
        self.expression
    }

    /// How cursor values for this field decode and bind.
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Reads this field's value from a record, e.g. to build a cursor.
    pub fn value_of(&self, record: &R) -> SortValue {
        (self.value)(record)
    }
}

impl<R> Clone for SortField<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SortField<R> {}

impl<R> Debug for SortField<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SortField")
            .field("name", &self.name)
            .field("expression", &self.expression)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<R> PartialEq for SortField<R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.expression == other.expression
    }
}

impl<R> Eq for SortField<R> {}

/// A soft-deletable resource that can be listed with keyset pagination.
pub trait Listable: Sized + 'static {
    /// Table holding the rows.
    const TABLE: &'static str;

    /// Select list producing one record.
    const COLUMNS: &'static str;

    /// External id field. Always the final tie-break key.
    const EXTERNAL_ID: SortField<Self>;

    /// Every field callers may sort by, including [`Self::EXTERNAL_ID`].
    const SORT_FIELDS: &'static [SortField<Self>];

    /// Columns matched by substring search.
    const SEARCH_COLUMNS: &'static [&'static str];

    /// The record's external id.
    fn external_id(&self) -> &str;

    /// Looks a field up in the allow-list by its logical name.
    fn sort_field(name: &str) -> Option<SortField<Self>> {
        Self::SORT_FIELDS
            .iter()
            .find(|field| field.name() == name)
            .copied()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;

    use super::*;

    /// Minimal listable record used by the pagination tests.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Widget {
        pub(crate) widget_id: String,
        pub(crate) name: Option<String>,
        pub(crate) created_at: Timestamp,
    }

    impl Listable for Widget {
        const TABLE: &'static str = "widgets";
        const COLUMNS: &'static str = "id, widget_id, name, created_at";
        const EXTERNAL_ID: SortField<Self> = SortField::text("widgetId", "widget_id", |widget| {
            SortValue::from(widget.widget_id.as_str())
        });
        const SORT_FIELDS: &'static [SortField<Self>] = &[
            Self::EXTERNAL_ID,
            SortField::text("name", "COALESCE(name, '')", |widget| {
                SortValue::from(widget.name.as_deref().unwrap_or_default())
            }),
            SortField::timestamp("createdAt", "created_at", |widget| {
                SortValue::from(widget.created_at)
            }),
        ];
        const SEARCH_COLUMNS: &'static [&'static str] = &["widget_id", "name"];

        fn external_id(&self) -> &str {
            &self.widget_id
        }
    }

    #[test]
    fn sort_field_lookup_uses_logical_names() {
        let field = Widget::sort_field("name");

        assert_eq!(field.map(|f| f.expression()), Some("COALESCE(name, '')"));
        assert_eq!(field.map(|f| f.kind()), Some(FieldKind::Text));
    }

    #[test]
    fn sort_field_lookup_rejects_column_names() {
        assert!(Widget::sort_field("created_at").is_none());
        assert!(Widget::sort_field("name; DROP TABLE widgets").is_none());
        assert!(Widget::sort_field("").is_none());
    }

    #[test]
    fn sort_field_reads_record_values() {
        let widget = Widget {
            widget_id: "w-1".to_string(),
            name: None,
            created_at: Timestamp::UNIX_EPOCH,
        };

        let name = Widget::sort_field("name").map(|field| field.value_of(&widget));
        let created = Widget::sort_field("createdAt").map(|field| field.value_of(&widget));

        assert_eq!(name, Some(SortValue::Text(String::new())));
        assert_eq!(created, Some(SortValue::Timestamp(Timestamp::UNIX_EPOCH)));
    }
}
