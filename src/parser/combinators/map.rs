//! Map combinator - transforms the parsed value.

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Transforms the output of a successful parse.
///
/// Errors pass through untouched and the function is not called for them.
#[derive(Clone)]
pub struct Map<P, F> {
    pub(crate) inner: P,
    pub(crate) f: F,
}

impl<P: std::fmt::Debug, F> std::fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<P, F, O2> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> O2,
{
    type Input = P::Input;
    type Output = O2;
    type Error = P::Error;

    #[inline]
    fn parse(&self, input: &Self::Input) -> Validated<O2, Self::Error> {
        self.inner.parse(input).map(&self.f)
    }
}
