//! Outcome of a parse: a typed value or every error found
//!
//! [`Validated`] plays the role `Result` plays elsewhere, with one difference
//! that matters for input validation: the failure side is a
//! [`NonEmptyVec`] of errors, and combining two failures keeps both.
//!
//! # Examples
//!
//! ## Inspecting a result
//!
//! ```
//! use tribune::Validated;
//!
//! let ok = Validated::<_, &str>::valid(42);
//! assert!(ok.is_valid());
//! assert_eq!(ok.unwrap(), 42);
//!
//! let bad = Validated::<i32, _>::invalid("not a number");
//! assert_eq!(bad.unwrap_errors(), vec!["not a number"]);
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use tribune::Validated;
//! use tribune::validated::ValidateAll;
//!
//! let result = (
//!     Validated::<i32, _>::invalid("title is blank"),
//!     Validated::<i32, &str>::valid(2),
//!     Validated::<i32, _>::invalid("isbn too short"),
//! )
//!     .validate_all();
//!
//! assert_eq!(result.unwrap_errors(), vec!["title is blank", "isbn too short"]);
//! ```

use std::fmt;

use crate::{NonEmptyVec, Semigroup};

/// Either a successfully parsed value or the non-empty, ordered list of errors
/// that prevented it.
///
/// Equality is structural: two results are equal when they are the same
/// variant and carry equal payloads, with errors compared element by element
/// in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<T, E> {
    /// The input parsed into a value.
    Valid(T),
    /// The input was rejected; errors are in detection order.
    Invalid(NonEmptyVec<E>),
}

impl<T, E> Validated<T, E> {
    /// Wrap a successful value.
    #[inline]
    pub fn valid(value: T) -> Self {
        Validated::Valid(value)
    }

    /// A failure carrying exactly one error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validated::Invalid(NonEmptyVec::singleton(error))
    }

    /// A failure carrying the given errors.
    #[inline]
    pub fn invalid_all(errors: NonEmptyVec<E>) -> Self {
        Validated::Invalid(errors)
    }

    /// Lift a single-error `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribune::Validated;
    ///
    /// let v = Validated::from_result("12".parse::<i32>().map_err(|_| "nan"));
    /// assert_eq!(v, Validated::valid(12));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::invalid(error),
        }
    }

    /// Lift a `Result` that already carries a non-empty error list.
    #[inline]
    pub fn from_result_nel(result: Result<T, NonEmptyVec<E>>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(errors) => Validated::Invalid(errors),
        }
    }

    /// Convert into a `Result` so the outcome can be used with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, NonEmptyVec<E>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => Err(errors),
        }
    }

    /// `true` for [`Validated::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// `true` for [`Validated::Invalid`].
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(_))
    }

    /// Borrow the value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(_) => None,
        }
    }

    /// Borrow the errors, if any.
    #[inline]
    pub fn errors(&self) -> Option<&NonEmptyVec<E>> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(errors) => Some(errors),
        }
    }

    /// Number of errors carried; zero when valid.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors().map_or(0, NonEmptyVec::len)
    }

    /// Take the value, discarding any errors.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(_) => None,
        }
    }

    /// Transform the value. Errors pass through and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribune::Validated;
    ///
    /// assert_eq!(Validated::<_, &str>::valid(5).map(|x| x * 2), Validated::valid(10));
    /// assert_eq!(
    ///     Validated::<i32, _>::invalid("e").map(|x| x * 2),
    ///     Validated::invalid("e")
    /// );
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Transform each error, keeping their order.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validated<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(errors) => Validated::Invalid(errors.map(f)),
        }
    }

    /// Chain a check that depends on the value.
    ///
    /// Stops at the first failure: `f` is only called for a valid value.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> Validated<U, E>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Pair two independent results, keeping the errors of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribune::Validated;
    ///
    /// let left = Validated::<i32, _>::invalid("e1");
    /// let right = Validated::<i32, _>::invalid("e2");
    /// assert_eq!(left.and(right).unwrap_errors(), vec!["e1", "e2"]);
    /// ```
    pub fn and<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Validated::Invalid(e1), Validated::Invalid(e2)) => Validated::Invalid(e1.combine(e2)),
            (Validated::Invalid(errors), _) | (_, Validated::Invalid(errors)) => {
                Validated::Invalid(errors)
            }
        }
    }

    /// Collect a list of results, accumulating every error in list order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tribune::Validated;
    ///
    /// let all = Validated::all_vec(vec![
    ///     Validated::valid(1),
    ///     Validated::invalid("e1"),
    ///     Validated::valid(3),
    ///     Validated::invalid("e2"),
    /// ]);
    /// assert_eq!(all.unwrap_errors(), vec!["e1", "e2"]);
    /// ```
    pub fn all_vec(results: Vec<Validated<T, E>>) -> Validated<Vec<T>, E> {
        let mut values = Vec::with_capacity(results.len());
        let mut errors = ErrorAccumulator::new();

        for result in results {
            match result {
                Validated::Valid(value) => values.push(value),
                Validated::Invalid(es) => errors.record(es),
            }
        }

        errors.finish(values)
    }
}

impl<T, E: fmt::Debug> Validated<T, E> {
    /// Return the value, panicking if the result is invalid.
    ///
    /// A test and debugging aid; recoverable code should match on the result
    /// or use [`into_result`](Self::into_result).
    ///
    /// # Panics
    ///
    /// Panics with the error list when called on [`Validated::Invalid`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(errors) => {
                panic!("called `Validated::unwrap()` on an `Invalid` value: {errors:?}")
            }
        }
    }
}

impl<T: fmt::Debug, E> Validated<T, E> {
    /// Return the errors, panicking if the result is valid.
    ///
    /// # Panics
    ///
    /// Panics with the value when called on [`Validated::Valid`].
    #[track_caller]
    pub fn unwrap_errors(self) -> NonEmptyVec<E> {
        match self {
            Validated::Valid(value) => {
                panic!("called `Validated::unwrap_errors()` on a `Valid` value: {value:?}")
            }
            Validated::Invalid(errors) => errors,
        }
    }
}

impl<T, E> From<Validated<T, E>> for Result<T, NonEmptyVec<E>> {
    fn from(validated: Validated<T, E>) -> Self {
        validated.into_result()
    }
}

/// Ordered error builder, local to a single combination.
#[derive(Debug)]
pub(crate) struct ErrorAccumulator<E> {
    errors: Option<NonEmptyVec<E>>,
}

impl<E> ErrorAccumulator<E> {
    pub(crate) fn new() -> Self {
        Self { errors: None }
    }

    pub(crate) fn record(&mut self, errors: NonEmptyVec<E>) {
        match &mut self.errors {
            Some(acc) => acc.append(errors),
            None => self.errors = Some(errors),
        }
    }

    /// Consume the builder: `Invalid` if anything was recorded, `Valid(value)` otherwise.
    pub(crate) fn finish<T>(self, value: T) -> Validated<T, E> {
        match self.errors {
            Some(errors) => Validated::Invalid(errors),
            None => Validated::Valid(value),
        }
    }
}

/// Combine a tuple of results, accumulating errors in tuple order.
///
/// Implemented for tuples of 1 to 12 [`Validated`] values sharing an error
/// type. This is the applicative core that `compose` builds on.
pub trait ValidateAll<E> {
    /// Tuple of the success values.
    type Output;

    /// Every value if all are valid, otherwise every error in order.
    fn validate_all(self) -> Validated<Self::Output, E>;
}

/// Left-nested pattern matching the shape `a.and(b).and(c)` produces.
macro_rules! nested_pattern {
    (@acc [$($acc:tt)*]) => { $($acc)* };
    (@acc [$($acc:tt)*] $next:ident $(, $rest:ident)*) => {
        nested_pattern!(@acc [($($acc)*, $next)] $($rest),*)
    };
    ($first:ident $(, $rest:ident)*) => {
        nested_pattern!(@acc [$first] $($rest),*)
    };
}

macro_rules! impl_validate_all {
    ($v1:ident $T1:ident $(, $v:ident $T:ident)*) => {
        impl<E, $T1, $($T),*> ValidateAll<E> for (Validated<$T1, E>, $(Validated<$T, E>,)*) {
            type Output = ($T1, $($T,)*);

            fn validate_all(self) -> Validated<Self::Output, E> {
                let ($v1, $($v,)*) = self;
                $v1$(.and($v))*.map(|nested_pattern!($v1 $(, $v)*)| ($v1, $($v,)*))
            }
        }
    };
}

impl_validate_all!(v1 T1);
impl_validate_all!(v1 T1, v2 T2);
impl_validate_all!(v1 T1, v2 T2, v3 T3);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4, v5 T5);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6, v7 T7);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6, v7 T7, v8 T8);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6, v7 T7, v8 T8, v9 T9);
impl_validate_all!(v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6, v7 T7, v8 T8, v9 T9, v10 T10);
impl_validate_all!(
    v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6, v7 T7, v8 T8, v9 T9, v10 T10, v11 T11
);
impl_validate_all!(
    v1 T1, v2 T2, v3 T3, v4 T4, v5 T5, v6 T6, v7 T7, v8 T8, v9 T9, v10 T10, v11 T11, v12 T12
);
