//! Small extension traits over the types `std` already gives us.
//!
//! # Purpose
//! Every module here adds one or two convenience operations to an existing type: reducing an
//! iterator of `bool`s, treating a [`Vec`] as a queue, formatting a
//! [`Duration`](std::time::Duration) compactly, decimating progress callbacks and so on. None of
//! them hold shared state and none of them depend on each other.
//!
//! # Method
//! Each operation is a method on an extension trait, implemented either directly for the target
//! type or as a blanket implementation. Bring the trait into scope (or glob-import the module) and
//! the methods show up on the type:
//!
//! ```
//! use standard_ext::iter::BoolIterExt;
//! use standard_ext::tuple::PairExt;
//!
//! assert!([true, true].and());
//! assert_eq!((3, 7).min_max(), (7, 3));
//! ```
//!
//! # Error Handling
//! Operations that can fail return strongly typed errors: small structs implementing
//! [`Error`](std::error::Error), and enums over them where an operation has more than one failure
//! mode. Passing an argument that can never be valid (such as decimating progress by a step of 0)
//! is a programmer error and panics, documented under `# Panics`.
//!
//! # Features
//! Each module sits behind a feature of the same name, all of which are enabled by default. The
//! [`progress`] module pulls in `parking_lot` for its timestamp lock.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "enums")]
pub mod enums;
#[cfg(feature = "geometry")]
pub mod geometry;
#[cfg(feature = "iter")]
pub mod iter;
#[cfg(feature = "progress")]
pub mod progress;
#[cfg(feature = "record")]
pub mod record;
#[cfg(feature = "text")]
pub mod text;
#[cfg(feature = "time")]
pub mod time;
#[cfg(feature = "tuple")]
pub mod tuple;

pub(crate) mod util;
