// Partial-update statement builder
//
// Turns "which fields changed" into a positional SET clause so the update
// path never special-cases the supplied subset of fields.

use jobly_core::error::{AppError, Result};
use std::collections::HashMap;

/// SET clause plus its values, in matching order
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate<V> {
    /// `"col1"=$1, "col2"=$2`
    pub set_cols: String,
    pub values: Vec<V>,
}

impl<V> PartialUpdate<V> {
    /// Position of the next placeholder after the SET values (for a WHERE clause)
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build a SET clause from `(field, value)` pairs.
///
/// Fields are numbered from `$1` in the order given. `column_names` maps a
/// field to its column; fields missing from it are used as-is.
///
/// # Errors
///
/// `InvalidInput("No data")` when `data` is empty.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use jobly_infra_sqlite::sql_for_partial_update;
///
/// let columns = HashMap::from([("firstName", "first_name")]);
/// let update = sql_for_partial_update(vec![("firstName", "Aliya"), ("age", "32")], &columns).unwrap();
/// assert_eq!(update.set_cols, r#""first_name"=$1, "age"=$2"#);
/// assert_eq!(update.values, vec!["Aliya", "32"]);
/// ```
pub fn sql_for_partial_update<K, V>(
    data: Vec<(K, V)>,
    column_names: &HashMap<&str, &str>,
) -> Result<PartialUpdate<V>>
where
    K: AsRef<str>,
{
    if data.is_empty() {
        return Err(AppError::InvalidInput("No data".to_string()));
    }

    let mut cols = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());

    for (idx, (field, value)) in data.into_iter().enumerate() {
        let field = field.as_ref();
        let column = column_names.get(field).copied().unwrap_or(field);
        cols.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: cols.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_known_fields_and_keeps_others() {
        let columns = HashMap::from([("firstName", "first_name"), ("lastName", "last_name")]);
        let update =
            sql_for_partial_update(vec![("firstName", "John"), ("lastName", "Doe")], &columns)
                .unwrap();

        assert_eq!(update.set_cols, r#""first_name"=$1, "last_name"=$2"#);
        assert_eq!(update.values, vec!["John", "Doe"]);
    }

    #[test]
    fn test_preserves_input_order() {
        let columns = HashMap::from([("companyHandle", "company_handle")]);
        let update = sql_for_partial_update(
            vec![("salary", 1), ("companyHandle", 2), ("title", 3)],
            &columns,
        )
        .unwrap();

        assert_eq!(
            update.set_cols,
            r#""salary"=$1, "company_handle"=$2, "title"=$3"#
        );
        assert_eq!(update.values, vec![1, 2, 3]);
        assert_eq!(update.next_placeholder(), 4);
    }

    #[test]
    fn test_single_field_without_translation() {
        let update =
            sql_for_partial_update(vec![("title".to_string(), "X")], &HashMap::new()).unwrap();
        assert_eq!(update.set_cols, r#""title"=$1"#);
    }

    #[test]
    fn test_empty_data_is_invalid_input() {
        let err = sql_for_partial_update(Vec::<(&str, i32)>::new(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "No data"));
    }
}
