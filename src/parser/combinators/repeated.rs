//! Repeated combinator - parses every element of a list.

use crate::parser::trait_def::Parser;
use crate::validated::ErrorAccumulator;
use crate::Validated;

/// Applies the inner parser to each element of a `Vec` input.
///
/// Elements are independent, so every element is parsed and the errors of all
/// failing elements are returned in element order.
#[derive(Debug, Clone)]
pub struct Repeated<P> {
    pub(crate) inner: P,
}

impl<P: Parser> Parser for Repeated<P> {
    type Input = Vec<P::Input>;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        let mut values = Vec::with_capacity(input.len());
        let mut errors = ErrorAccumulator::new();

        for element in input {
            match self.inner.parse(element) {
                Validated::Valid(value) => values.push(value),
                Validated::Invalid(es) => errors.record(es),
            }
        }

        errors.finish(values)
    }
}
