//! Keyset query builder

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, QueryBuilder};

use crate::pagination::{
    fields::Listable,
    params::{Cursor, ListParams, Page, SortOrder},
    value::SortValue,
};

/// Builds the list statement for `params` over `R`'s table.
///
/// Only allow-listed expressions and fixed keywords become SQL text; the
/// search pattern, cursor components and limit are always bind parameters.
/// Backward pages run in inverted order, so rows come back nearest the cursor
/// first.
pub(crate) fn build_list_query<R: Listable>(
    params: &ListParams<R>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE deleted_at IS NULL",
        R::COLUMNS,
        R::TABLE
    ));

    if let Some(query) = params.query() {
        push_search::<R>(&mut builder, query);
    }

    let direction = match params.page() {
        Page::Before(_) => params.sort_order().reverse(),
        Page::First | Page::After(_) => params.sort_order(),
    };

    if let Page::After(cursor) | Page::Before(cursor) = params.page() {
        push_cursor(&mut builder, params, cursor, direction);
    }

    let id = R::EXTERNAL_ID.expression();
    let dir = direction.as_sql();

    if params.is_single_key() {
        builder.push(format!(" ORDER BY {id} {dir}"));
    } else {
        let expr = params.sort_field().expression();
        builder.push(format!(" ORDER BY {expr} {dir}, {id} {dir}"));
    }

    builder
        .push(" LIMIT ")
        .push_bind(i64::from(params.limit()));

    builder
}

fn push_search<R: Listable>(builder: &mut QueryBuilder<'static, Postgres>, query: &str) {
    let pattern = like_pattern(query);

    builder.push(" AND (");

    for (i, column) in R::SEARCH_COLUMNS.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }

        builder
            .push(format!("{column} LIKE "))
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\'");
    }

    builder.push(")");
}

fn push_cursor<R: Listable>(
    builder: &mut QueryBuilder<'static, Postgres>,
    params: &ListParams<R>,
    cursor: &Cursor,
    direction: SortOrder,
) {
    let id = R::EXTERNAL_ID.expression();
    let op = match direction {
        SortOrder::Asc => ">",
        SortOrder::Desc => "<",
    };

    match &cursor.value {
        Some(value) if !params.is_single_key() => {
            let expr = params.sort_field().expression();

            builder.push(format!(" AND ({expr} {op} "));
            push_value(builder, value);
            builder.push(format!(" OR ({expr} = "));
            push_value(builder, value);
            builder
                .push(format!(" AND {id} {op} "))
                .push_bind(cursor.id.clone())
                .push("))");
        }
        _ => {
            builder
                .push(format!(" AND {id} {op} "))
                .push_bind(cursor.id.clone());
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &SortValue) {
    match value {
        SortValue::Text(text) => builder.push_bind(text.clone()),
        SortValue::Timestamp(timestamp) => builder.push_bind(SqlxTimestamp::from(*timestamp)),
    };
}

/// `%query%` with LIKE metacharacters escaped, for a literal substring match.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);

    pattern.push('%');

    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
