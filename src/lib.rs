//! # Tribune
//!
//! Composable parsers that turn loosely-typed input into validated domain
//! values, reporting every problem they find rather than the first.
//!
//! A [`Parser`] maps a borrowed input to a [`Validated`]: either the parsed
//! value, or a non-empty list of errors. Parsers for single fields are built
//! by chaining checks; parsers for records are built by [`compose`]-ing the
//! field parsers with a constructor.
//!
//! - Checks chained on one field stop at the first failure.
//! - Fields joined with `compose` are all parsed, and their errors are
//!   returned together in declaration order.
//!
//! ## Quick Example
//!
//! ```rust
//! use tribune::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Signup {
//!     name: String,
//!     age: i32,
//! }
//!
//! struct Form {
//!     name: Option<String>,
//!     age: String,
//! }
//!
//! let name = non_blank_string(|| "name is required".to_string())
//!     .contramap(|form: &Form| form.name.clone());
//!
//! let age = identity::<String, String>()
//!     .trim()
//!     .int(|s| format!("'{s}' is not a number"))
//!     .in_range(18..=130, |n| format!("{n} is not an adult age"))
//!     .contramap(|form: &Form| form.age.clone());
//!
//! let signup = compose((name, age), |name: String, age: i32| Signup { name, age });
//!
//! let ok = signup.parse(&Form { name: Some("Ada".into()), age: " 36 ".into() });
//! assert_eq!(ok, Validated::valid(Signup { name: "Ada".into(), age: 36 }));
//!
//! let bad = signup.parse(&Form { name: None, age: "12".into() });
//! assert_eq!(
//!     bad.unwrap_errors(),
//!     vec!["name is required".to_string(), "12 is not an adult age".to_string()]
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod nonempty;
pub mod parser;
pub mod parsers;
pub mod predicate;
pub mod semigroup;
pub mod testing;
pub mod validated;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use context::ContextError;
pub use nonempty::NonEmptyVec;
pub use parser::{compose, from_fn, identity, BoxedParser, Parser, ParserExt};
pub use semigroup::Semigroup;
pub use validated::Validated;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::ContextError;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::parser::{compose, from_fn, identity, BoxedParser, Parser, ParserExt};
    pub use crate::parsers::{
        non_blank_string, NumberParserExt, OptionalParserExt, OptionalStringParserExt,
        StringParserExt,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::validated::{ValidateAll, Validated};

    #[cfg(feature = "tracing")]
    pub use crate::parser::ParserTracingExt;
}
