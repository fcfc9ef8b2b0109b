/// Logical reductions for anything that iterates over `bool`s.
///
/// # Examples
/// ```
/// # use standard_ext::iter::BoolIterExt;
/// assert!([true, true, true].and());
/// assert!(![true, false, true].and_lazy());
/// assert!(Vec::<bool>::new().and());
/// assert!(!Vec::<bool>::new().or());
/// ```
///
/// Types with inherent `and`/`or`/`xor` methods of their own, such as [`Option<bool>`], resolve
/// method syntax to those instead. Call through the trait for them:
/// ```
/// # use standard_ext::iter::BoolIterExt;
/// assert!(!BoolIterExt::and(Some(false)));
/// assert!(BoolIterExt::and(None::<bool>));
/// ```
pub trait BoolIterExt: IntoIterator<Item = bool> + Sized {
    /// Returns true if every item is true, consuming the entire sequence regardless. An empty
    /// sequence yields `true`.
    fn and(self) -> bool {
        self.into_iter().fold(true, |acc, item| acc & item)
    }

    /// Returns true if every item is true, stopping at the first false item.
    fn and_lazy(self) -> bool {
        self.into_iter().all(|item| item)
    }

    /// Returns true if any item is true, consuming the entire sequence regardless. An empty
    /// sequence yields `false`.
    fn or(self) -> bool {
        self.into_iter().fold(false, |acc, item| acc | item)
    }

    /// Returns true if any item is true, stopping at the first true item.
    fn or_lazy(self) -> bool {
        self.into_iter().any(|item| item)
    }

    /// Returns true if an odd number of items are true. There is no lazy counterpart, the parity
    /// is only known once the sequence ends.
    fn xor(self) -> bool {
        self.into_iter().fold(false, |acc, item| acc ^ item)
    }
}

impl<I: IntoIterator<Item = bool>> BoolIterExt for I {}
