//! Combinator methods for every [`Parser`].
//!
//! [`ParserExt`] is implemented for all parsers. Each method consumes the
//! receiver and returns a new parser; nothing is shared between the two.

use std::marker::PhantomData;

use crate::context::ContextError;
use crate::parser::boxed::BoxedParser;
use crate::parser::combinators::{
    AddContext, AllowNulls, Context, Contramap, Ensure, Filter, FlatMap, Map, MapErr, NotNull,
    Repeated,
};
use crate::parser::trait_def::Parser;
use crate::predicate::Predicate;
use crate::Validated;

/// Extension trait providing the combinator algebra.
///
/// Within one chain, checks short-circuit: once a step fails the remaining
/// steps of that chain are skipped. Accumulation across independent fields is
/// the job of [`compose`](crate::parser::compose).
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let quantity = identity::<String, String>()
///     .flat_map(|s| match s.parse::<u32>() {
///         Ok(n) => Validated::valid(n),
///         Err(_) => Validated::invalid(format!("'{s}' is not a number")),
///     })
///     .filter(|n| *n > 0, |_| "quantity must be positive".to_string());
///
/// assert_eq!(quantity.parse(&"3".to_string()), Validated::valid(3));
/// assert_eq!(
///     quantity.parse(&"x".to_string()).unwrap_errors(),
///     vec!["'x' is not a number".to_string()]
/// );
/// ```
pub trait ParserExt: Parser + Sized {
    /// Transform the parsed value.
    ///
    /// Obeys the functor laws: `p.map(|x| x)` behaves like `p`, and
    /// `p.map(f).map(g)` behaves like `p.map(|x| g(f(x)))`.
    fn map<F, O2>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> O2,
    {
        Map { inner: self, f }
    }

    /// Run a dependent check on the parsed value.
    ///
    /// `f` only runs when this parser succeeded; otherwise its errors are
    /// returned unchanged.
    fn flat_map<F, O2>(self, f: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Validated<O2, Self::Error>,
    {
        FlatMap { inner: self, f }
    }

    /// Reject values for which `predicate` is false with `if_error(&value)`.
    fn filter<F, G>(self, predicate: F, if_error: G) -> Filter<Self, F, G>
    where
        F: Fn(&Self::Output) -> bool,
        G: Fn(&Self::Output) -> Self::Error,
    {
        Filter {
            inner: self,
            predicate,
            if_error,
        }
    }

    /// Like [`filter`](Self::filter), taking a reusable [`Predicate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tribune::prelude::*;
    /// use tribune::predicate::{gt, lt, PredicateExt};
    ///
    /// let percent = identity::<i32, &str>().ensure(gt(-1).and(lt(101)), |_| "not a percentage");
    /// assert!(percent.parse(&100).is_valid());
    /// assert!(percent.parse(&101).is_invalid());
    /// ```
    fn ensure<Pr, G>(self, predicate: Pr, if_error: G) -> Ensure<Self, Pr, G>
    where
        Pr: Predicate<Self::Output>,
        G: Fn(&Self::Output) -> Self::Error,
    {
        Ensure {
            inner: self,
            predicate,
            if_error,
        }
    }

    /// Adapt the input type by projecting it with `f` first.
    ///
    /// `p.contramap(f).contramap(g)` applies `g`, then `f`, then `p`.
    fn contramap<I2, F>(self, f: F) -> Contramap<Self, F, I2>
    where
        F: Fn(&I2) -> Self::Input,
    {
        Contramap {
            inner: self,
            f,
            _marker: PhantomData,
        }
    }

    /// Accept a missing input: `None` parses to `Valid(None)` without running
    /// this parser.
    fn allow_nulls(self) -> AllowNulls<Self> {
        AllowNulls { inner: self }
    }

    /// Reject a missing input with the single error `if_error()`.
    fn not_null<G>(self, if_error: G) -> NotNull<Self, G>
    where
        G: Fn() -> Self::Error,
    {
        NotNull {
            inner: self,
            if_error,
        }
    }

    /// Convert each error with `f`, keeping their order.
    fn map_err<F, E2>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2,
    {
        MapErr { inner: self, f }
    }

    /// Tag every error with `label`, wrapping it in a [`ContextError`].
    fn context(self, label: impl Into<String>) -> Context<Self> {
        Context {
            inner: self,
            label: label.into(),
        }
    }

    /// Add an outer `label` to errors that already carry context.
    fn add_context<E>(self, label: impl Into<String>) -> AddContext<Self>
    where
        Self: Parser<Error = ContextError<E>>,
    {
        AddContext {
            inner: self,
            label: label.into(),
        }
    }

    /// Parse each element of a `Vec`, collecting the errors of every element.
    fn repeated(self) -> Repeated<Self> {
        Repeated { inner: self }
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedParser<Self::Input, Self::Output, Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

impl<P: Parser> ParserExt for P {}
