//! MapErr combinator - rewrites errors.

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Rewrites every error of a failed parse, keeping their order.
#[derive(Clone)]
pub struct MapErr<P, F> {
    pub(crate) inner: P,
    pub(crate) f: F,
}

impl<P: std::fmt::Debug, F> std::fmt::Debug for MapErr<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<P, F, E2> Parser for MapErr<P, F>
where
    P: Parser,
    F: Fn(P::Error) -> E2,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = E2;

    #[inline]
    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, E2> {
        self.inner.parse(input).map_err(&self.f)
    }
}
