//! String field parsers.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::parser::combinators::{Ensure, Map};
use crate::parser::{identity, Identity, Parser, ParserExt};
use crate::predicate::{len_matches, len_max, len_min, not_blank, LenBetween, LenMatches, NotBlank};
use crate::Validated;

/// Parses a string output into any [`FromStr`] type.
///
/// Created by [`StringParserExt::parse_as`] and its shorthands.
pub struct ParseAs<P, T, G> {
    inner: P,
    if_error: G,
    _marker: PhantomData<fn() -> T>,
}

impl<P: Clone, T, G: Clone> Clone for ParseAs<P, T, G> {
    fn clone(&self) -> Self {
        ParseAs {
            inner: self.inner.clone(),
            if_error: self.if_error.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: fmt::Debug, T, G> fmt::Debug for ParseAs<P, T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAs")
            .field("inner", &self.inner)
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<P, T, G> Parser for ParseAs<P, T, G>
where
    P: Parser<Output = String>,
    T: FromStr,
    G: Fn(&String) -> P::Error,
{
    type Input = P::Input;
    type Output = T;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<T, P::Error> {
        self.inner.parse(input).and_then(|s| match s.parse::<T>() {
            Ok(value) => Validated::valid(value),
            Err(_) => Validated::invalid((self.if_error)(&s)),
        })
    }
}

/// Combinators for parsers producing a `String`.
pub trait StringParserExt: Parser<Output = String> + Sized {
    /// Strip leading and trailing whitespace.
    fn trim(self) -> Map<Self, fn(String) -> String> {
        self.map(trim_owned as fn(String) -> String)
    }

    /// Lowercase the string.
    fn to_lowercase(self) -> Map<Self, fn(String) -> String> {
        self.map((|s: String| s.to_lowercase()) as fn(String) -> String)
    }

    /// Uppercase the string.
    fn to_uppercase(self) -> Map<Self, fn(String) -> String> {
        self.map((|s: String| s.to_uppercase()) as fn(String) -> String)
    }

    /// Reject empty or whitespace-only strings.
    fn not_blank<G>(self, if_error: G) -> Ensure<Self, NotBlank, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.ensure(not_blank(), if_error)
    }

    /// Reject strings whose character count fails `f`.
    fn length<F, G>(self, f: F, if_error: G) -> Ensure<Self, LenMatches<F>, G>
    where
        F: Fn(usize) -> bool + Send + Sync,
        G: Fn(&String) -> Self::Error,
    {
        self.ensure(len_matches(f), if_error)
    }

    /// Reject strings shorter than `min` characters.
    fn min_len<G>(self, min: usize, if_error: G) -> Ensure<Self, LenBetween, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.ensure(len_min(min), if_error)
    }

    /// Reject strings longer than `max` characters.
    fn max_len<G>(self, max: usize, if_error: G) -> Ensure<Self, LenBetween, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.ensure(len_max(max), if_error)
    }

    /// Convert with [`FromStr`]; a failed conversion becomes `if_error(&s)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tribune::prelude::*;
    ///
    /// let port = identity::<String, &str>().parse_as::<u16, _>(|_| "not a port");
    /// assert_eq!(port.parse(&"8080".to_string()), Validated::valid(8080));
    /// assert!(port.parse(&"70000".to_string()).is_invalid());
    /// ```
    fn parse_as<T, G>(self, if_error: G) -> ParseAs<Self, T, G>
    where
        T: FromStr,
        G: Fn(&String) -> Self::Error,
    {
        ParseAs {
            inner: self,
            if_error,
            _marker: PhantomData,
        }
    }

    /// Parse as `i32`.
    fn int<G>(self, if_error: G) -> ParseAs<Self, i32, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.parse_as(if_error)
    }

    /// Parse as `i64`.
    fn long<G>(self, if_error: G) -> ParseAs<Self, i64, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.parse_as(if_error)
    }

    /// Parse as `f64`, ignoring surrounding whitespace.
    ///
    /// `if_error` sees the trimmed string.
    fn double<G>(self, if_error: G) -> ParseAs<Map<Self, fn(String) -> String>, f64, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.trim().parse_as(if_error)
    }

    /// Parse `"true"` or `"false"`.
    fn boolean<G>(self, if_error: G) -> ParseAs<Self, bool, G>
    where
        G: Fn(&String) -> Self::Error,
    {
        self.parse_as(if_error)
    }
}

impl<P: Parser<Output = String>> StringParserExt for P {}

fn trim_owned(s: String) -> String {
    let trimmed = s.trim();
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_string()
    }
}

fn blank_to_none(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

/// Rejects a missing or blank optional string with one error.
///
/// Created by [`OptionalStringParserExt::not_null_or_blank`].
#[derive(Clone)]
pub struct NotNullOrBlank<P, G> {
    inner: P,
    if_error: G,
}

impl<P: fmt::Debug, G> fmt::Debug for NotNullOrBlank<P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotNullOrBlank")
            .field("inner", &self.inner)
            .field("if_error", &"<function>")
            .finish()
    }
}

impl<P, G> Parser for NotNullOrBlank<P, G>
where
    P: Parser<Output = Option<String>>,
    G: Fn() -> P::Error,
{
    type Input = P::Input;
    type Output = String;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<String, P::Error> {
        self.inner
            .parse(input)
            .and_then(|value| match blank_to_none(value) {
                Some(s) => Validated::valid(s),
                None => Validated::invalid((self.if_error)()),
            })
    }
}

/// Combinators for parsers producing an `Option<String>`.
pub trait OptionalStringParserExt: Parser<Output = Option<String>> + Sized {
    /// Require a present, non-blank string.
    fn not_null_or_blank<G>(self, if_error: G) -> NotNullOrBlank<Self, G>
    where
        G: Fn() -> Self::Error,
    {
        NotNullOrBlank {
            inner: self,
            if_error,
        }
    }

    /// Treat a blank string as missing.
    fn null_if_blank(self) -> Map<Self, fn(Option<String>) -> Option<String>> {
        self.map(blank_to_none as fn(Option<String>) -> Option<String>)
    }
}

impl<P: Parser<Output = Option<String>>> OptionalStringParserExt for P {}

/// Parser for an optional string field that must be present and non-blank.
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let title = non_blank_string(|| "Title must be provided");
/// assert_eq!(title.parse(&Some("Dune".into())), Validated::valid("Dune".to_string()));
/// assert_eq!(title.parse(&Some(" ".into())), Validated::invalid("Title must be provided"));
/// assert_eq!(title.parse(&None), Validated::invalid("Title must be provided"));
/// ```
pub fn non_blank_string<E, G>(if_error: G) -> NotNullOrBlank<Identity<Option<String>, E>, G>
where
    G: Fn() -> E,
{
    identity::<Option<String>, E>().not_null_or_blank(if_error)
}
