//! A module containing [`ListExt`], general-purpose additions to [`Vec`].

mod list;

pub use list::*;

pub use crate::util::error::IndexOutOfBounds;
