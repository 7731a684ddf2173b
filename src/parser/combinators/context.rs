//! Context combinators - label errors with the field they belong to.

use crate::context::ContextError;
use crate::parser::trait_def::Parser;
use crate::Validated;

/// Wraps every error in a [`ContextError`] carrying one label.
#[derive(Debug, Clone)]
pub struct Context<P> {
    pub(crate) inner: P,
    pub(crate) label: String,
}

impl<P: Parser> Parser for Context<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = ContextError<P::Error>;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        self.inner
            .parse(input)
            .map_err(|e| ContextError::new(e).context(self.label.as_str()))
    }
}

/// Adds an outer label to errors that already carry context.
#[derive(Debug, Clone)]
pub struct AddContext<P> {
    pub(crate) inner: P,
    pub(crate) label: String,
}

impl<P, E> Parser for AddContext<P>
where
    P: Parser<Error = ContextError<E>>,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = ContextError<E>;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        self.inner
            .parse(input)
            .map_err(|e| e.context(self.label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn context_labels_each_error() {
        let p = identity::<String, &str>()
            .filter(|s| !s.is_empty(), |_| "blank")
            .context("title");

        let errors = p.parse(&String::new()).unwrap_errors();
        assert_eq!(errors.head().inner(), &"blank");
        assert_eq!(errors.head().path(), "title");
        assert!(p.parse(&"x".to_string()).is_valid());
    }

    #[test]
    fn add_context_nests_labels() {
        let p = identity::<i32, &str>()
            .filter(|n| *n > 0, |_| "not positive")
            .context("quantity")
            .add_context("line_item");

        let errors = p.parse(&0).unwrap_errors();
        assert_eq!(errors.head().context_trail(), &["quantity", "line_item"]);
        assert_eq!(errors.head().to_string(), "line_item.quantity: not positive");
    }
}
