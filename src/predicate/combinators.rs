//! The predicate trait and boolean composition.

/// A check over values of type `T`.
///
/// Implemented for every `Fn(&T) -> bool + Send + Sync`, and by the named
/// predicates of this module.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// `true` when `value` satisfies the predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-style composition for the named predicates.
///
/// The methods do not mention the checked type, so string predicates (which
/// check both `str` and `String`) combine without annotations. Closures are
/// combined with the free functions [`and`], [`or`] and [`not`].
///
/// ```rust
/// use tribune::predicate::*;
///
/// let isbn13 = starts_with("978").or(starts_with("979")).and(len_eq(13));
/// assert!(isbn13.check("9780441013593"));
/// assert!(!isbn13.check("9770441013593"));
///
/// let outside = gt(0).and(lt(10)).not();
/// assert!(outside.check(&10));
/// ```
pub trait PredicateExt: Sized {
    /// Both must hold.
    fn and<P>(self, other: P) -> And<Self, P> {
        and(self, other)
    }

    /// At least one must hold.
    fn or<P>(self, other: P) -> Or<Self, P> {
        or(self, other)
    }

    /// Inverts the result.
    fn not(self) -> Not<Self> {
        not(self)
    }
}

/// Holds when `left` and `right` both hold; `right` is skipped when `left` fails.
#[derive(Clone, Copy, Debug)]
pub struct And<L, R> {
    left: L,
    right: R,
}

/// Holds when either side holds; `right` is skipped when `left` holds.
#[derive(Clone, Copy, Debug)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

/// Holds when the inner predicate does not.
#[derive(Clone, Copy, Debug)]
pub struct Not<P> {
    inner: P,
}

/// Conjunction of two predicates.
pub fn and<L, R>(left: L, right: R) -> And<L, R> {
    And { left, right }
}

/// Disjunction of two predicates.
pub fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or { left, right }
}

/// Negation of a predicate.
pub fn not<P>(inner: P) -> Not<P> {
    Not { inner }
}

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for And<L, R> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.left.check(value) && self.right.check(value)
    }
}

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for Or<L, R> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.left.check(value) || self.right.check(value)
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.inner.check(value)
    }
}

impl<L, R> PredicateExt for And<L, R> {}
impl<L, R> PredicateExt for Or<L, R> {}
impl<P> PredicateExt for Not<P> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_predicates() {
        let even = |n: &i32| n % 2 == 0;
        assert!(even.check(&4));
        assert!(!even.check(&3));
    }

    #[test]
    fn closures_combine_with_free_functions() {
        let even = |n: &i32| n % 2 == 0;
        let big = |n: &i32| *n > 100;

        assert!(and(even, big).check(&102));
        assert!(!and(even, big).check(&4));
        assert!(or(even, big).check(&4));
        assert!(or(even, big).check(&101));
        assert!(!or(even, big).check(&3));
        assert!(not(even).check(&3));
    }

    #[test]
    fn combined_predicates_chain() {
        let even = |n: &i32| n % 2 == 0;
        let small = |n: &i32| *n < 10;

        let p = and(even, small).or(|n: &i32| *n == 99).not();
        assert!(!p.check(&4));
        assert!(!p.check(&99));
        assert!(p.check(&12));
    }

    #[test]
    fn and_short_circuits() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let counted = |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };

        assert!(!and(|_: &i32| false, &counted).check(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
