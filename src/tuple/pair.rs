/// Extensions for a pair of values of the same type.
///
/// Comparisons only need [`PartialOrd`], so these work for floats too. Whenever the two elements
/// don't compare as strictly ordered (they're equal, or one is NaN) the pair keeps its original
/// order.
///
/// # Examples
/// ```
/// # use standard_ext::tuple::PairExt;
/// assert_eq!((1, 9).min_max(), (9, 1));
/// assert_eq!((9, 1).min_max(), (9, 1));
/// assert_eq!((2.5, -1.0).lesser(), -1.0);
/// ```
pub trait PairExt<T> {
    /// Returns the pair ordered as `(max, min)`.
    fn min_max(self) -> (T, T);

    /// Returns the smaller element, the second of [`min_max`](PairExt::min_max).
    fn lesser(self) -> T;

    /// Returns the larger element, the first of [`min_max`](PairExt::min_max).
    fn greater(self) -> T;

    /// Returns the pair with its elements swapped.
    fn swap(self) -> (T, T);
}

impl<T: PartialOrd> PairExt<T> for (T, T) {
    fn min_max(self) -> (T, T) {
        let (a, b) = self;
        if b > a { (b, a) } else { (a, b) }
    }

    fn lesser(self) -> T {
        self.min_max().1
    }

    fn greater(self) -> T {
        self.min_max().0
    }

    fn swap(self) -> (T, T) {
        (self.1, self.0)
    }
}
