use std::fmt::Display;
use std::str::FromStr;

use log::debug;

use super::{Record, RecordExt, RowError};

/// Column-wise access over an iterator of [`Record`]s.
pub trait ReaderExt: Iterator + Sized
where
    Self::Item: Record,
{
    /// Reads the non-nullable column `name` from every row, stopping at the first row that fails.
    ///
    /// # Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use standard_ext::record::ReaderExt;
    /// let rows = ["1", "2", "3"]
    ///     .map(|n| BTreeMap::from([(String::from("n"), Some(String::from(n)))]));
    /// assert_eq!(rows.iter().column::<u8>("n"), Ok(vec![1, 2, 3]));
    /// ```
    fn column<T>(self, name: &str) -> Result<Vec<T>, RowError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.enumerate()
            .map(|(row, record)| {
                record.value(name).map_err(|source| {
                    debug!("reading column {name:?} failed at row {row}: {source}");
                    RowError { row, source }
                })
            })
            .collect()
    }

    /// Reads the nullable column `name` from every row.
    fn column_opt<T>(self, name: &str) -> Result<Vec<Option<T>>, RowError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.enumerate()
            .map(|(row, record)| {
                record.value_opt(name).map_err(|source| {
                    debug!("reading column {name:?} failed at row {row}: {source}");
                    RowError { row, source }
                })
            })
            .collect()
    }
}

impl<I> ReaderExt for I
where
    I: Iterator,
    I::Item: Record,
{
}
