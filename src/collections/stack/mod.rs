//! A module containing [`StackExt`] and [`QueueExt`], which convert between a [`Vec`] used as a
//! stack and a [`VecDeque`](std::collections::VecDeque) used as a queue, and let either be driven
//! with the other's operations.
//!
//! Both traits are also re-exported under the parent module.

mod queue;
mod stack;

pub use queue::*;
pub use stack::*;
