//! FlatMap combinator - chains a check that depends on the parsed value.

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Runs a dependent step after a successful parse.
///
/// This is the only combinator that stops early: when the inner parser fails
/// its errors are returned as-is and the step never runs.
#[derive(Clone)]
pub struct FlatMap<P, F> {
    pub(crate) inner: P,
    pub(crate) f: F,
}

impl<P: std::fmt::Debug, F> std::fmt::Debug for FlatMap<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<P, F, O2> Parser for FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Validated<O2, P::Error>,
{
    type Input = P::Input;
    type Output = O2;
    type Error = P::Error;

    #[inline]
    fn parse(&self, input: &Self::Input) -> Validated<O2, Self::Error> {
        self.inner.parse(input).and_then(&self.f)
    }
}
