//! Assertion helpers for tests of parsers
//!
//! The macros print the unexpected side of a [`Validated`](crate::Validated)
//! when they fail, which reads better in test output than
//! `assert!(result.is_valid())`.
//!
//! With the `proptest` feature, [`Validated`](crate::Validated) and
//! [`NonEmptyVec`](crate::NonEmptyVec) implement
//! [`Arbitrary`](proptest::arbitrary::Arbitrary).
//!
//! # Examples
//!
//! ```rust
//! use tribune::prelude::*;
//! use tribune::{assert_errors, assert_invalid, assert_valid};
//!
//! let age = identity::<i32, &str>().in_range(0..=150, |_| "not an age");
//!
//! assert_valid!(age.parse(&30));
//! assert_valid!(age.parse(&30), 30);
//! assert_invalid!(age.parse(&-1));
//! assert_errors!(age.parse(&200), vec!["not an age"]);
//! ```

/// Assert that a result is `Valid`, optionally with a given value.
///
/// # Example
///
/// ```rust
/// use tribune::{assert_valid, Validated};
///
/// assert_valid!(Validated::<_, &str>::valid(42));
/// assert_valid!(Validated::<_, &str>::valid(42), 42);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            $crate::Validated::Valid(_) => {}
            $crate::Validated::Invalid(errors) => {
                panic!("Expected Valid, got Invalid: {:?}", errors);
            }
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::Validated::Valid(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Validated::Invalid(errors) => {
                panic!(
                    "Expected Valid({:?}), got Invalid: {:?}",
                    $expected, errors
                );
            }
        }
    };
}

/// Assert that a result is `Invalid`.
///
/// # Example
///
/// ```rust
/// use tribune::{assert_invalid, Validated};
///
/// assert_invalid!(Validated::<i32, _>::invalid("blank"));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            $crate::Validated::Invalid(_) => {}
            $crate::Validated::Valid(value) => {
                panic!("Expected Invalid, got Valid: {:?}", value);
            }
        }
    };
}

/// Assert that a result is `Invalid` with exactly these errors, in order.
///
/// # Example
///
/// ```rust
/// use tribune::{assert_errors, NonEmptyVec, Validated};
///
/// let result = Validated::<i32, _>::invalid_all(NonEmptyVec::new("a", vec!["b"]));
/// assert_errors!(result, vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::Validated::Invalid(errors) => {
                assert_eq!(errors.into_vec(), $expected);
            }
            $crate::Validated::Valid(value) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::{NonEmptyVec, Validated};

    impl<T> Arbitrary for NonEmptyVec<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            (any_with::<T>(args), vec(any::<T>(), 0..8))
                .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
                .boxed()
        }
    }

    impl<T, E> Arbitrary for Validated<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validated::Valid),
                any_with::<NonEmptyVec<E>>(e_params).prop_map(Validated::Invalid),
            ]
            .boxed()
        }
    }
}
