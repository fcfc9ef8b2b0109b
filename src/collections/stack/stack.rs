use std::collections::VecDeque;

/// Queue-flavoured operations for a [`Vec`] used as a stack (top at the end).
///
/// # Examples
/// ```
/// # use std::collections::VecDeque;
/// # use standard_ext::collections::StackExt;
/// let stack = vec![1, 2, 3];
/// // 3 is on top, so it is dequeued first.
/// assert_eq!(stack.to_queue(), VecDeque::from([3, 2, 1]));
/// assert_eq!(stack.to_queue_reversed(), VecDeque::from([1, 2, 3]));
/// ```
pub trait StackExt<T> {
    /// Copies the stack into a queue that dequeues elements in the order they would be popped.
    fn to_queue(&self) -> VecDeque<T>
    where
        T: Clone;

    /// Copies the stack into a queue that dequeues elements in the reverse of the order they would
    /// be popped, bottom of the stack first.
    fn to_queue_reversed(&self) -> VecDeque<T>
    where
        T: Clone;

    /// Owned variant of [`to_queue`](StackExt::to_queue), which moves the elements rather than
    /// cloning them.
    fn into_queue(self) -> VecDeque<T>;

    /// Owned variant of [`to_queue_reversed`](StackExt::to_queue_reversed).
    fn into_queue_reversed(self) -> VecDeque<T>;

    /// Adds `value` to the bottom of the stack, so that it is popped after every element already
    /// present, as if the stack were a queue. This is `O(n)`.
    fn enqueue(&mut self, value: T);

    /// Removes the element that would be dequeued next, which for a stack is the top.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a reference to the top of the stack without removing it.
    fn peek(&self) -> Option<&T>;
}

impl<T> StackExt<T> for Vec<T> {
    fn to_queue(&self) -> VecDeque<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    fn to_queue_reversed(&self) -> VecDeque<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn into_queue(mut self) -> VecDeque<T> {
        self.reverse();
        VecDeque::from(self)
    }

    fn into_queue_reversed(self) -> VecDeque<T> {
        VecDeque::from(self)
    }

    fn enqueue(&mut self, value: T) {
        self.insert(0, value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.last()
    }
}
