//! Typed access to rows of named, nullable text fields, as handed out by a data reader.
//!
//! A row is anything implementing [`Record`]. [`RecordExt`] parses fields into typed values and
//! [`ReaderExt`] pulls a whole column out of an iterator of rows.

mod error;
mod reader;
mod record;

pub use error::*;
pub use reader::*;
pub use record::*;
