//! The parser abstraction and its combinators.
//!
//! A [`Parser`] turns a borrowed input into a [`Validated`](crate::Validated)
//! outcome. Parsers are built from a root ([`identity`] or [`from_fn`]),
//! refined with the [`ParserExt`] combinators, and joined into record parsers
//! with [`compose`].
//!
//! Two rules govern how errors are reported:
//!
//! - within one chain (`map`, `flat_map`, `filter`, ...) the first failure
//!   stops the chain, so a field reports at most one problem at a time;
//! - across the parsers given to [`compose`] nothing stops early, and the
//!   errors of every failing field are returned in declaration order.

pub mod combinators;

mod boxed;
mod compose;
mod constructors;
mod ext;
mod trait_def;

#[cfg(feature = "tracing")]
mod tracing;

pub use boxed::BoxedParser;
pub use compose::{compose, Compose, Constructor, ParserTuple};
pub use constructors::{from_fn, identity, FromFn, Identity};
pub use ext::ParserExt;
pub use trait_def::Parser;

#[cfg(feature = "tracing")]
pub use self::tracing::{Instrument, ParserTracingExt};
