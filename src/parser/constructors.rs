//! Root parsers: where a parser chain starts.

use std::fmt;
use std::marker::PhantomData;

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Parser that accepts every input as-is.
///
/// Created by [`identity`].
pub struct Identity<I, E> {
    _marker: PhantomData<fn(&I) -> (I, E)>,
}

impl<I, E> fmt::Debug for Identity<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("input", &std::any::type_name::<I>())
            .finish()
    }
}

impl<I, E> Clone for Identity<I, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, E> Copy for Identity<I, E> {}

impl<I: Clone, E> Parser for Identity<I, E> {
    type Input = I;
    type Output = I;
    type Error = E;

    #[inline]
    fn parse(&self, input: &I) -> Validated<I, E> {
        Validated::valid(input.clone())
    }
}

/// Start a parser chain for inputs of type `I` failing with errors of type `E`.
///
/// The returned parser is always valid; attach checks and conversions with
/// the [`ParserExt`](crate::parser::ParserExt) combinators.
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let p = identity::<String, &str>();
/// assert_eq!(p.parse(&"abc".to_string()), Validated::valid("abc".to_string()));
/// ```
pub fn identity<I, E>() -> Identity<I, E> {
    Identity {
        _marker: PhantomData,
    }
}

/// Parser backed by a plain function.
///
/// Created by [`from_fn`].
pub struct FromFn<F, I> {
    f: F,
    _marker: PhantomData<fn(&I)>,
}

impl<F, I> fmt::Debug for FromFn<F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F: Clone, I> Clone for FromFn<F, I> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I, O, E> Parser for FromFn<F, I>
where
    F: Fn(&I) -> Validated<O, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    #[inline]
    fn parse(&self, input: &I) -> Validated<O, E> {
        (self.f)(input)
    }
}

/// Build a leaf parser from a function.
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let even = from_fn(|n: &u32| {
///     if n % 2 == 0 {
///         Validated::valid(*n)
///     } else {
///         Validated::invalid(format!("{n} is odd"))
///     }
/// });
///
/// assert_eq!(even.parse(&4), Validated::valid(4));
/// assert_eq!(even.parse(&3).unwrap_errors(), vec!["3 is odd".to_string()]);
/// ```
pub fn from_fn<F, I, O, E>(f: F) -> FromFn<F, I>
where
    F: Fn(&I) -> Validated<O, E>,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}
