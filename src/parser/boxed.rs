//! BoxedParser - type-erased parser.
//!
//! Use `BoxedParser` when you need to:
//! - store parsers of different concrete types together
//! - return different parsers from match arms
//! - name a parser's type in a struct field or a `static`

use std::fmt;
use std::sync::Arc;

use crate::parser::trait_def::Parser;
use crate::Validated;

type ParseFn<I, O, E> = dyn Fn(&I) -> Validated<O, E> + Send + Sync;

/// A parser behind a shared, immutable function pointer.
///
/// Cloning is cheap and clones run the same function. The function must be
/// `Send + Sync`, so a `BoxedParser` can be shared across threads.
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// fn field(required: bool) -> BoxedParser<Option<String>, Option<String>, &'static str> {
///     if required {
///         identity::<String, _>().not_null(|| "required").map(Some).boxed()
///     } else {
///         identity::<String, _>().allow_nulls().boxed()
///     }
/// }
///
/// assert!(field(true).parse(&None).is_invalid());
/// assert_eq!(field(false).parse(&None), Validated::valid(None));
/// ```
pub struct BoxedParser<I, O, E> {
    parse_fn: Arc<ParseFn<I, O, E>>,
}

impl<I, O, E> BoxedParser<I, O, E> {
    /// Box any parser with matching types.
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Input = I, Output = O, Error = E> + Send + Sync + 'static,
    {
        BoxedParser {
            parse_fn: Arc::new(move |input: &I| parser.parse(input)),
        }
    }

    /// Box a parsing function directly.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&I) -> Validated<O, E> + Send + Sync + 'static,
    {
        BoxedParser {
            parse_fn: Arc::new(f),
        }
    }
}

impl<I, O, E> Clone for BoxedParser<I, O, E> {
    fn clone(&self) -> Self {
        BoxedParser {
            parse_fn: Arc::clone(&self.parse_fn),
        }
    }
}

impl<I, O, E> fmt::Debug for BoxedParser<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser")
            .field("parse_fn", &"<function>")
            .finish()
    }
}

impl<I, O, E> Parser for BoxedParser<I, O, E> {
    type Input = I;
    type Output = O;
    type Error = E;

    #[inline]
    fn parse(&self, input: &I) -> Validated<O, E> {
        (self.parse_fn)(input)
    }
}
