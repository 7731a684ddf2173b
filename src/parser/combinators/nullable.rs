//! Combinators for optional inputs.
//!
//! A missing field is modelled as `None`. [`AllowNulls`] lets it through as a
//! missing output; [`NotNull`] turns it into an error.

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Lifts a parser to optional input: `None` parses to `Valid(None)`.
#[derive(Debug, Clone)]
pub struct AllowNulls<P> {
    pub(crate) inner: P,
}

impl<P: Parser> Parser for AllowNulls<P> {
    type Input = Option<P::Input>;
    type Output = Option<P::Output>;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        match input {
            None => Validated::valid(None),
            Some(value) => self.inner.parse(value).map(Some),
        }
    }
}

/// Lifts a parser to optional input: `None` is a single error.
#[derive(Clone)]
pub struct NotNull<P, G> {
    pub(crate) inner: P,
    pub(crate) if_error: G,
}

impl<P: std::fmt::Debug, G> std::fmt::Debug for NotNull<P, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotNull")
            .field("inner", &self.inner)
            .field("if_error", &"<function>")
            .finish()
    }
}

impl<P, G> Parser for NotNull<P, G>
where
    P: Parser,
    G: Fn() -> P::Error,
{
    type Input = Option<P::Input>;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        match input {
            None => Validated::invalid((self.if_error)()),
            Some(value) => self.inner.parse(value),
        }
    }
}
