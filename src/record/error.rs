use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("no column named {column:?}")]
pub struct MissingColumn {
    pub column: String,
}

/// The field exists but holds no value, while a non-nullable result was requested.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("column {column:?} is null")]
pub struct NullValue {
    pub column: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("column {column:?} holds {value:?}, which failed to parse: {message}")]
pub struct ParseField {
    pub column: String,
    pub value: String,
    pub message: String,
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum FieldError {
    MissingColumn(MissingColumn),
    NullValue(NullValue),
    Parse(ParseField),
}

/// A [`FieldError`] raised while reading a column across several rows.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("row {row}: {source}")]
pub struct RowError {
    pub row: usize,
    pub source: FieldError,
}
