//! String predicates.
//!
//! Lengths are counted in `char`s, not bytes, so `"é"` has length 1.
//! Every predicate applies to both `str` and `String`.

use super::combinators::{Predicate, PredicateExt};

macro_rules! forward_to_str {
    (impl$(<$g:ident>)? for $ty:ty $(where $($bounds:tt)+)?) => {
        impl$(<$g>)? Predicate<String> for $ty $(where $($bounds)+)? {
            #[inline]
            fn check(&self, value: &String) -> bool {
                Predicate::<str>::check(self, value.as_str())
            }
        }

        impl$(<$g>)? PredicateExt for $ty {}
    };
}

/// String contains at least one non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

forward_to_str!(impl for NotBlank);

/// String is not empty and not only whitespace.
///
/// ```rust
/// use tribune::predicate::*;
///
/// assert!(not_blank().check("a"));
/// assert!(!not_blank().check("  "));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Character count lies in an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

forward_to_str!(impl for LenBetween);

/// Character count in `min..=max`.
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// At least `min` characters.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// At most `max` characters.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Exactly `len` characters.
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Character count satisfies an arbitrary check.
#[derive(Clone, Copy, Debug)]
pub struct LenMatches<F>(pub F);

impl<F: Fn(usize) -> bool + Send + Sync> Predicate<str> for LenMatches<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        (self.0)(value.chars().count())
    }
}

forward_to_str!(impl<F> for LenMatches<F> where F: Fn(usize) -> bool + Send + Sync);

/// Character count satisfies `f`.
///
/// ```rust
/// use tribune::predicate::*;
///
/// let isbn_length = len_matches(|n| n == 10 || n == 13);
/// assert!(isbn_length.check("0123456789"));
/// assert!(!isbn_length.check("123"));
/// ```
pub fn len_matches<F: Fn(usize) -> bool + Send + Sync>(f: F) -> LenMatches<F> {
    LenMatches(f)
}

/// String contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

forward_to_str!(impl<S> for Contains<S> where S: AsRef<str> + Send + Sync);

/// String contains `needle`.
pub fn contains<S: AsRef<str> + Send + Sync>(needle: S) -> Contains<S> {
    Contains(needle)
}

/// String starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

forward_to_str!(impl<S> for StartsWith<S> where S: AsRef<str> + Send + Sync);

/// String starts with `prefix`.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}
