use std::collections::VecDeque;

/// Stack-flavoured operations for a [`VecDeque`] used as a queue (enqueue at the back, dequeue
/// from the front).
///
/// # Examples
/// ```
/// # use std::collections::VecDeque;
/// # use standard_ext::collections::QueueExt;
/// let queue = VecDeque::from([1, 2, 3]);
/// let mut stack = queue.to_stack();
/// assert_eq!(stack.pop(), Some(1));
/// ```
pub trait QueueExt<T> {
    /// Copies the queue into a stack that pops elements in the order they would be dequeued.
    fn to_stack(&self) -> Vec<T>
    where
        T: Clone;

    /// Copies the queue into a stack that pops elements in the reverse of the order they would be
    /// dequeued, back of the queue first.
    fn to_stack_reversed(&self) -> Vec<T>
    where
        T: Clone;

    /// Owned variant of [`to_stack`](QueueExt::to_stack), which moves the elements rather than
    /// cloning them.
    fn into_stack(self) -> Vec<T>;

    /// Owned variant of [`to_stack_reversed`](QueueExt::to_stack_reversed).
    fn into_stack_reversed(self) -> Vec<T>;

    /// Pushes `value` so that it is the next element dequeued, as if the queue were a stack.
    fn push(&mut self, value: T);

    /// Removes the next element, which is the most recently pushed one if [`push`](QueueExt::push)
    /// was used.
    fn pop(&mut self) -> Option<T>;
}

impl<T> QueueExt<T> for VecDeque<T> {
    fn to_stack(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    fn to_stack_reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn into_stack(self) -> Vec<T> {
        let mut buf = Vec::from(self);
        buf.reverse();
        buf
    }

    fn into_stack_reversed(self) -> Vec<T> {
        Vec::from(self)
    }

    fn push(&mut self, value: T) {
        self.push_front(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}
