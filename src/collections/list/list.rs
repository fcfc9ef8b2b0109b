use crate::util::error::IndexOutOfBounds;

/// Additional list operations for [`Vec`].
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert_sorted` | `O(n)` |
/// | `remove_where` | `O(n)` |
/// | `replace_all` | `O(n)` |
/// | `try_swap` | `O(1)` |
pub trait ListExt<T> {
    /// Inserts `value` into an already sorted list, after any elements equal to it, and returns
    /// the index it was inserted at. If the list isn't sorted the position is unspecified, but the
    /// value is still inserted.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::collections::ListExt;
    /// let mut list = vec![1, 3, 5];
    /// assert_eq!(list.insert_sorted(4), 2);
    /// assert_eq!(list, [1, 3, 4, 5]);
    /// ```
    fn insert_sorted(&mut self, value: T) -> usize
    where
        T: Ord;

    /// Removes every element matching `pred`, preserving the order of the rest. Returns the number
    /// of elements removed.
    fn remove_where<F: FnMut(&T) -> bool>(&mut self, pred: F) -> usize;

    /// Replaces every element equal to `old` with a clone of `new`, returning the number of
    /// replacements.
    fn replace_all(&mut self, old: &T, new: T) -> usize
    where
        T: PartialEq + Clone;

    /// Swaps the elements at `a` and `b`, or returns an error instead of panicking when either is
    /// out of bounds.
    fn try_swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfBounds>;
}

impl<T> ListExt<T> for Vec<T> {
    fn insert_sorted(&mut self, value: T) -> usize
    where
        T: Ord,
    {
        let index = self.partition_point(|item| item <= &value);
        self.insert(index, value);
        index
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let before = self.len();
        self.retain(|item| !pred(item));
        before - self.len()
    }

    fn replace_all(&mut self, old: &T, new: T) -> usize
    where
        T: PartialEq + Clone,
    {
        let mut count = 0;
        for item in self.iter_mut().filter(|item| *item == old) {
            *item = new.clone();
            count += 1;
        }
        count
    }

    fn try_swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        for index in [a, b] {
            if index >= len {
                return Err(IndexOutOfBounds { index, len });
            }
        }
        self.swap(a, b);
        Ok(())
    }
}
