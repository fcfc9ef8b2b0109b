//! Extensions for [`Vec`] and [`VecDeque`](std::collections::VecDeque) when used as lists, stacks
//! and queues.
//!
//! # Conventions
//! A [`Vec`] used as a stack has its top at the end, matching [`Vec::push`] and [`Vec::pop`]. A
//! [`VecDeque`](std::collections::VecDeque) used as a queue enqueues at the back and dequeues from
//! the front.
//!
//! When converting between the two, "order" means removal order: the order in which elements
//! would be popped from a stack or dequeued from a queue. Plain conversions preserve it, the
//! `reversed` conversions invert it.

pub mod list;
pub mod stack;

#[doc(inline)]
pub use list::ListExt;
#[doc(inline)]
pub use stack::{QueueExt, StackExt};
