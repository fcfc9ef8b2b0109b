use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::str::FromStr;

use super::{FieldError, MissingColumn, NullValue, ParseField};

/// A single row of named fields.
pub trait Record {
    /// Looks up a field by column name. The outer [`Option`] is [`None`] if there is no such
    /// column, the inner one is [`None`] if the field is null.
    fn field(&self, column: &str) -> Option<Option<&str>>;
}

impl<S: BuildHasher> Record for HashMap<String, Option<String>, S> {
    fn field(&self, column: &str) -> Option<Option<&str>> {
        self.get(column).map(Option::as_deref)
    }
}

impl Record for BTreeMap<String, Option<String>> {
    fn field(&self, column: &str) -> Option<Option<&str>> {
        self.get(column).map(Option::as_deref)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, column: &str) -> Option<Option<&str>> {
        (**self).field(column)
    }
}

/// Typed getters for any [`Record`].
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use standard_ext::record::{FieldError, RecordExt};
/// let row = BTreeMap::from([
///     (String::from("id"), Some(String::from("7"))),
///     (String::from("parent"), None),
/// ]);
///
/// assert_eq!(row.value::<u32>("id"), Ok(7));
/// assert_eq!(row.value_opt::<u32>("parent"), Ok(None));
/// assert_eq!(row.value_or("parent", 0_u32), Ok(0));
/// assert!(matches!(row.value::<u32>("parent"), Err(FieldError::NullValue(_))));
/// ```
pub trait RecordExt: Record {
    /// Parses a non-nullable field. A null field is a [`NullValue`] error.
    fn value<T>(&self, column: &str) -> Result<T, FieldError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.value_opt(column)?.ok_or_else(|| {
            FieldError::from(NullValue {
                column: column.to_owned(),
            })
        })
    }

    /// Parses a nullable field, mapping null to [`None`].
    fn value_opt<T>(&self, column: &str) -> Result<Option<T>, FieldError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(field) = self.field(column) else {
            return Err(MissingColumn {
                column: column.to_owned(),
            }
            .into());
        };

        field
            .map(|value| {
                value.parse().map_err(|err: T::Err| {
                    FieldError::from(ParseField {
                        column: column.to_owned(),
                        value: value.to_owned(),
                        message: err.to_string(),
                    })
                })
            })
            .transpose()
    }

    /// Parses a field, substituting `default` when it is null. A missing column is still an error.
    fn value_or<T>(&self, column: &str, default: T) -> Result<T, FieldError>
    where
        T: FromStr,
        T::Err: Display,
    {
        Ok(self.value_opt(column)?.unwrap_or(default))
    }

    /// Parses a field, substituting [`T::default()`](Default::default) when it is null.
    fn value_or_default<T>(&self, column: &str) -> Result<T, FieldError>
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        Ok(self.value_opt(column)?.unwrap_or_default())
    }

    /// Returns true if the field is null.
    fn is_null(&self, column: &str) -> Result<bool, MissingColumn> {
        self.field(column).map(|field| field.is_none()).ok_or_else(|| MissingColumn {
            column: column.to_owned(),
        })
    }
}

impl<R: Record + ?Sized> RecordExt for R {}
