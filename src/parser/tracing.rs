//! Tracing support for parsers.
//!
//! This module provides the `Instrument` combinator and `instrument` method
//! for running a parser inside a tracing span. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use crate::parser::trait_def::Parser;
use crate::Validated;

/// A parser that runs inside a tracing span.
///
/// Created by [`ParserTracingExt::instrument`].
#[derive(Debug, Clone)]
pub struct Instrument<P> {
    pub(crate) inner: P,
    pub(crate) span: tracing::Span,
}

impl<P: Parser> Parser for Instrument<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        let _entered = self.span.enter();
        let result = self.inner.parse(input);
        tracing::debug!(
            valid = result.is_valid(),
            errors = result.error_count(),
            "parse finished"
        );
        result
    }
}

/// Extension trait for adding tracing instrumentation to parsers.
pub trait ParserTracingExt: Parser + Sized {
    /// Run this parser inside `span` and log its outcome at `DEBUG`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tribune::prelude::*;
    /// use tribune::parser::ParserTracingExt;
    ///
    /// let isbn = identity::<String, &str>()
    ///     .filter(|s| s.len() == 10 || s.len() == 13, |_| "bad length")
    ///     .instrument(tracing::debug_span!("isbn"));
    ///
    /// assert!(isbn.parse(&"0123456789".to_string()).is_valid());
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<P: Parser> ParserTracingExt for P {}
