//! Parsers producing an `Option`.

use std::fmt;

use crate::parser::Parser;
use crate::Validated;

/// Replaces a missing value with a computed default.
///
/// Created by [`OptionalParserExt::with_default`].
#[derive(Clone)]
pub struct WithDefault<P, F> {
    inner: P,
    default: F,
}

impl<P: fmt::Debug, F> fmt::Debug for WithDefault<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithDefault")
            .field("inner", &self.inner)
            .field("default", &"<function>")
            .finish()
    }
}

impl<P, F, T> Parser for WithDefault<P, F>
where
    P: Parser<Output = Option<T>>,
    F: Fn() -> T,
{
    type Input = P::Input;
    type Output = T;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<T, P::Error> {
        self.inner
            .parse(input)
            .map(|value| value.unwrap_or_else(&self.default))
    }
}

/// Rejects a missing value with one error.
///
/// Created by [`OptionalParserExt::required`].
#[derive(Clone)]
pub struct Required<P, G> {
    inner: P,
    if_error: G,
}

impl<P: fmt::Debug, G> fmt::Debug for Required<P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Required")
            .field("inner", &self.inner)
            .field("if_error", &"<function>")
            .finish()
    }
}

impl<P, G, T> Parser for Required<P, G>
where
    P: Parser<Output = Option<T>>,
    G: Fn() -> P::Error,
{
    type Input = P::Input;
    type Output = T;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<T, P::Error> {
        self.inner.parse(input).and_then(|value| match value {
            Some(v) => Validated::valid(v),
            None => Validated::invalid((self.if_error)()),
        })
    }
}

/// Combinators for parsers whose output may be missing.
///
/// These act on the *output*; to accept or reject a missing *input* see
/// [`ParserExt::allow_nulls`](crate::parser::ParserExt::allow_nulls) and
/// [`ParserExt::not_null`](crate::parser::ParserExt::not_null).
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let page_size = identity::<Option<String>, &str>()
///     .null_if_blank()
///     .with_default(|| "20".to_string());
///
/// assert_eq!(page_size.parse(&None), Validated::valid("20".to_string()));
/// assert_eq!(page_size.parse(&Some("50".into())), Validated::valid("50".to_string()));
/// ```
pub trait OptionalParserExt<T>: Parser<Output = Option<T>> + Sized {
    /// Substitute `default()` for a missing value.
    fn with_default<F>(self, default: F) -> WithDefault<Self, F>
    where
        F: Fn() -> T,
    {
        WithDefault {
            inner: self,
            default,
        }
    }

    /// Fail with `if_error()` when the value is missing.
    fn required<G>(self, if_error: G) -> Required<Self, G>
    where
        G: Fn() -> Self::Error,
    {
        Required {
            inner: self,
            if_error,
        }
    }
}

impl<T, P: Parser<Output = Option<T>>> OptionalParserExt<T> for P {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn with_default_fills_missing_values() {
        let p = identity::<Option<i32>, ()>().with_default(|| 7);
        assert_eq!(p.parse(&None), Validated::valid(7));
        assert_eq!(p.parse(&Some(3)), Validated::valid(3));
    }

    #[test]
    fn required_rejects_missing_values() {
        let p = identity::<Option<i32>, &str>().required(|| "missing");
        assert_eq!(p.parse(&Some(3)), Validated::valid(3));
        assert_eq!(p.parse(&None).unwrap_errors(), vec!["missing"]);
    }

    #[test]
    fn allow_nulls_then_required_round_trip() {
        let p = identity::<String, &str>()
            .int(|_| "not an int")
            .allow_nulls()
            .required(|| "missing");

        assert_eq!(p.parse(&Some("5".to_string())), Validated::valid(5));
        assert_eq!(p.parse(&None).unwrap_errors(), vec!["missing"]);
        assert_eq!(
            p.parse(&Some("x".to_string())).unwrap_errors(),
            vec!["not an int"]
        );
    }
}
