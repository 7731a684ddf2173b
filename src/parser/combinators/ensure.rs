//! Ensure combinator - rejects parsed values that fail a [`Predicate`].

use crate::parser::trait_def::Parser;
use crate::predicate::Predicate;
use crate::Validated;

/// Keeps a successful value only when the predicate holds.
///
/// Behaves like [`Filter`](super::Filter) with a reusable
/// [`Predicate`] value in place of a closure.
#[derive(Clone)]
pub struct Ensure<P, Pr, G> {
    pub(crate) inner: P,
    pub(crate) predicate: Pr,
    pub(crate) if_error: G,
}

impl<P: std::fmt::Debug, Pr, G> std::fmt::Debug for Ensure<P, Pr, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensure")
            .field("inner", &self.inner)
            .field("predicate", &"<predicate>")
            .field("if_error", &"<function>")
            .finish()
    }
}

impl<P, Pr, G> Parser for Ensure<P, Pr, G>
where
    P: Parser,
    Pr: Predicate<P::Output>,
    G: Fn(&P::Output) -> P::Error,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        match self.inner.parse(input) {
            Validated::Valid(value) if self.predicate.check(&value) => Validated::Valid(value),
            Validated::Valid(value) => Validated::invalid((self.if_error)(&value)),
            invalid => invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::predicate::{between, len_between, PredicateExt};
    use crate::prelude::*;

    #[test]
    fn ensure_accepts_predicate_values() {
        let p = identity::<i32, &str>().ensure(between(1, 200), |_| "out of range");

        assert!(p.parse(&1).is_valid());
        assert!(p.parse(&200).is_valid());
        assert_eq!(p.parse(&0), Validated::invalid("out of range"));
        assert_eq!(p.parse(&201), Validated::invalid("out of range"));
    }

    #[test]
    fn ensure_with_combined_predicates() {
        let code = identity::<String, &str>()
            .ensure(len_between(2, 3).and(|s: &String| s.is_ascii()), |_| "bad code");

        assert!(code.parse(&"GB".to_string()).is_valid());
        assert_eq!(code.parse(&"G".to_string()), Validated::invalid("bad code"));
        assert_eq!(code.parse(&"ÉÉ".to_string()), Validated::invalid("bad code"));
    }
}
