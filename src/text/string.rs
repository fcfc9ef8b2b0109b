use std::borrow::Cow;

const ELLIPSIS: char = '…';

/// Extensions for [`str`].
///
/// # Examples
/// ```
/// # use standard_ext::text::StrExt;
/// assert_eq!("héllo".left(2), "hé");
/// assert_eq!("héllo".right(3), "llo");
/// assert_eq!("abcdef".ellipsize(4), "abc…");
/// assert!(" \t".is_blank());
/// ```
pub trait StrExt {
    /// Returns the first `n` chars, or the whole string if it is shorter.
    fn left(&self, n: usize) -> &str;

    /// Returns the last `n` chars, or the whole string if it is shorter.
    fn right(&self, n: usize) -> &str;

    /// Returns true if the string is empty or only contains whitespace.
    fn is_blank(&self) -> bool;

    /// Returns `default` if the string is blank, otherwise the string itself.
    fn or_if_blank<'a>(&'a self, default: &'a str) -> &'a str;

    /// Shortens the string to at most `max_chars` chars, replacing the tail with `…` when anything
    /// had to be cut. Borrows when no cut is needed.
    fn ellipsize(&self, max_chars: usize) -> Cow<'_, str>;
}

impl StrExt for str {
    fn left(&self, n: usize) -> &str {
        match self.char_indices().nth(n) {
            Some((index, _)) => &self[..index],
            None => self,
        }
    }

    fn right(&self, n: usize) -> &str {
        if n == 0 {
            return "";
        }
        match self.char_indices().nth_back(n - 1) {
            Some((index, _)) => &self[index..],
            None => self,
        }
    }

    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn or_if_blank<'a>(&'a self, default: &'a str) -> &'a str {
        if self.is_blank() { default } else { self }
    }

    fn ellipsize(&self, max_chars: usize) -> Cow<'_, str> {
        if self.chars().nth(max_chars).is_none() {
            return Cow::Borrowed(self);
        }
        match max_chars {
            0 => Cow::Borrowed(""),
            _ => {
                let mut out = String::from(self.left(max_chars - 1));
                out.push(ELLIPSIS);
                Cow::Owned(out)
            }
        }
    }
}
