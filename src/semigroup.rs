//! Associative combination of values
//!
//! Error accumulation is a semigroup operation: combining the errors of two
//! failed parses must not depend on how the combinations are grouped, only on
//! their order.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tribune::{NonEmptyVec, Semigroup};
//!
//! let first = NonEmptyVec::singleton("title is blank");
//! let second = NonEmptyVec::singleton("isbn too short");
//! assert_eq!(first.combine(second), vec!["title is blank", "isbn too short"]);
//! ```

/// A type with an associative binary operation.
///
/// `combine` consumes both operands; clone beforehand if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
