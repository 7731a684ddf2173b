//! Errors tagged with the field they came from
//!
//! When several fields are parsed and composed, a flat list of caller errors
//! can lose track of which field produced which message. [`ContextError`]
//! wraps an error with a trail of labels, innermost first, so that a nested
//! record can report `address.postcode` rather than just `"too short"`.
//!
//! Parsers attach labels with [`ParserExt::context`] and
//! [`ParserExt::add_context`].
//!
//! # Examples
//!
//! ```
//! use tribune::ContextError;
//!
//! let err = ContextError::new("too short").context("postcode").context("address");
//!
//! assert_eq!(err.inner(), &"too short");
//! assert_eq!(err.context_trail(), &["postcode", "address"]);
//! assert_eq!(err.path(), "address.postcode");
//! assert_eq!(err.to_string(), "address.postcode: too short");
//! ```
//!
//! [`ParserExt::context`]: crate::parser::ParserExt::context
//! [`ParserExt::add_context`]: crate::parser::ParserExt::add_context

use std::error::Error as StdError;
use std::fmt;

/// An error plus the labels of every scope it passed through.
///
/// Labels are stored in the order they were added: the field closest to the
/// failing check comes first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextError<E> {
    error: E,
    context: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap an error with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            context: Vec::new(),
        }
    }

    /// Add an outer label.
    pub fn context(mut self, label: impl Into<String>) -> Self {
        self.context.push(label.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the wrapped error.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Labels, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// Labels joined outermost first with `.`, e.g. `book.isbn`.
    ///
    /// Empty when no label has been added.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for (i, label) in self.context.iter().rev().enumerate() {
            if i > 0 {
                path.push('.');
            }
            path.push_str(label);
        }
        path
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.path(), self.error)
        }
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
