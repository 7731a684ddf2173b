//! Parser trait definition.
//!
//! A parser is a pure function from a borrowed input to a [`Validated`]
//! outcome. It holds no per-call state, so one value can be built once and
//! run any number of times, from any number of threads when its closures
//! allow it.
//!
//! Like `Iterator`, combinators return concrete types and only
//! [`boxed`](crate::parser::ParserExt::boxed) erases them.

use crate::Validated;

/// Converts an `Input` into an `Output`, or reports every reason it cannot.
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let age = identity::<i64, &str>()
///     .filter(|n| *n >= 0, |_| "age cannot be negative")
///     .map(|n| n as u32);
///
/// assert_eq!(age.parse(&41), Validated::valid(41));
/// assert_eq!(age.parse(&-1), Validated::invalid("age cannot be negative"));
/// ```
pub trait Parser {
    /// Raw value this parser reads.
    type Input;

    /// Typed value produced on success.
    type Output;

    /// Caller-defined error type; never inspected by the framework.
    type Error;

    /// Run the parser against one input.
    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    #[inline]
    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    #[inline]
    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        (**self).parse(input)
    }
}
