//! Ready-made parsers for common field types
//!
//! Everything here is built from the [`ParserExt`](crate::parser::ParserExt)
//! combinators; no method adds behaviour the core does not already have.
//! Checks chained on one field stop at the first failure, like any other
//! chain.
//!
//! # Example
//!
//! ```rust
//! use tribune::prelude::*;
//!
//! let price = identity::<String, String>()
//!     .trim()
//!     .double(|s| format!("'{s}' is not a number"))
//!     .positive(|d| format!("{d} is not positive"));
//!
//! assert_eq!(price.parse(&" 9.99 ".to_string()), Validated::valid(9.99));
//! assert_eq!(
//!     price.parse(&"-1".to_string()).unwrap_errors(),
//!     vec!["-1 is not positive".to_string()]
//! );
//! ```

mod numbers;
mod optional;
mod strings;

pub use numbers::NumberParserExt;
pub use optional::{OptionalParserExt, Required, WithDefault};
pub use strings::{
    non_blank_string, NotNullOrBlank, OptionalStringParserExt, ParseAs, StringParserExt,
};
