//! Maps decoded rows onto plain structs by column name.
//!
//! Target types declare a binding table once per type instead of being
//! inspected per row; matching stays case-insensitive and an absent
//! column leaves the field at its default.

use crate::{decode::decode_cell, QueryResult, RqliteError, Value};

/// Associates one struct field with the column that fills it.
pub struct Binding<T> {
    /// Column name, matched case-insensitively against result columns.
    pub column: &'static str,
    /// Writes a decoded value into the target field.
    pub assign: fn(&mut T, Value),
}

/// A row-mappable target type.
///
/// Implementors are default-constructed once per row, then filled field by
/// field from the row's cells. Columns with no binding are ignored;
/// bindings with no matching column leave the field at its default.
///
/// ```
/// use rqlite_http::{Binding, FromRow, Value};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl FromRow for User {
///     const COLUMNS: &'static [Binding<Self>] = &[
///         Binding {
///             column: "id",
///             assign: |user, value| {
///                 if let Value::Integer(id) = value {
///                     user.id = id;
///                 }
///             },
///         },
///         Binding {
///             column: "name",
///             assign: |user, value| {
///                 if let Value::Text(name) = value {
///                     user.name = name;
///                 }
///             },
///         },
///     ];
/// }
/// ```
pub trait FromRow: Default + Sized + 'static {
    /// Column bindings for this type.
    const COLUMNS: &'static [Binding<Self>];
}

/// Maps every row of `result` onto a fresh `T`, in row order.
///
/// The caller must have checked [`QueryResult::has_error`] already; this
/// layer only decodes. A cell that fails to decode aborts the whole
/// mapping — no partial list is returned. Re-mapping the same result
/// yields an equal sequence.
pub fn map_rows<T: FromRow>(result: &QueryResult) -> Result<Vec<T>, RqliteError> {
    let mut mapped = Vec::with_capacity(result.values.len());

    for row in &result.values {
        let mut record = T::default();
        for binding in T::COLUMNS {
            let Some(index) = result
                .columns
                .iter()
                .position(|column| column.eq_ignore_ascii_case(binding.column))
            else {
                continue;
            };
            let value = decode_cell(&result.types[index], &row[index])?;
            // Null leaves the field default, like an absent column.
            if !matches!(value, Value::Null) {
                (binding.assign)(&mut record, value);
            }
        }
        mapped.push(record);
    }

    Ok(mapped)
}
