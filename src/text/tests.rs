#![cfg(test)]

use std::borrow::Cow;

use super::*;

#[test]
fn test_left_right() {
    assert_eq!("abc".left(0), "");
    assert_eq!("abc".left(2), "ab");
    assert_eq!("abc".left(10), "abc", "Taking more than the length should return everything.");
    assert_eq!("abc".right(0), "");
    assert_eq!("abc".right(1), "c");
    assert_eq!("abc".right(3), "abc");
    assert_eq!("abc".right(10), "abc");

    assert_eq!("ñandú".left(2), "ña", "Multi-byte chars should count as one.");
    assert_eq!("ñandú".right(2), "dú");
    assert_eq!("".left(3), "");
    assert_eq!("".right(3), "");
}

#[test]
fn test_blank() {
    assert!("".is_blank());
    assert!(" \n\t ".is_blank());
    assert!(!" x ".is_blank());
    assert_eq!("   ".or_if_blank("n/a"), "n/a");
    assert_eq!("value".or_if_blank("n/a"), "value");
}

#[test]
fn test_ellipsize() {
    assert!(
        matches!("short".ellipsize(5), Cow::Borrowed("short")),
        "A string that fits should be borrowed unchanged."
    );
    assert_eq!("shorter".ellipsize(5), "shor…");
    assert_eq!("shorter".ellipsize(1), "…");
    assert_eq!("shorter".ellipsize(0), "");
    assert_eq!("".ellipsize(0), "");
    assert_eq!("ééééé".ellipsize(3), "éé…");
}
