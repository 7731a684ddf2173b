//! Filter combinator - rejects parsed values that fail a check.

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Keeps a successful value only when the check returns `true`.
///
/// A rejected value becomes a single error built from the value itself.
/// Already-failed parses pass through, so a chain of filters reports only
/// the first one that fails.
#[derive(Clone)]
pub struct Filter<P, F, G> {
    pub(crate) inner: P,
    pub(crate) predicate: F,
    pub(crate) if_error: G,
}

impl<P: std::fmt::Debug, F, G> std::fmt::Debug for Filter<P, F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .field("if_error", &"<function>")
            .finish()
    }
}

impl<P, F, G> Parser for Filter<P, F, G>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
    G: Fn(&P::Output) -> P::Error,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        match self.inner.parse(input) {
            Validated::Valid(value) if (self.predicate)(&value) => Validated::Valid(value),
            Validated::Valid(value) => Validated::invalid((self.if_error)(&value)),
            invalid => invalid,
        }
    }
}
