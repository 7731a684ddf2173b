//! Reusable predicates for [`ParserExt::ensure`](crate::parser::ParserExt::ensure)
//!
//! A [`Predicate`] is a named, composable boolean check. Closures work too,
//! but predicate values can be stored, combined with `and`/`or`/`not`, and
//! shared between parsers.
//!
//! # Example
//!
//! ```rust
//! use tribune::predicate::*;
//!
//! let username = len_between(3, 20).and(not_blank());
//! assert!(username.check("ada_l"));
//! assert!(!username.check("ab"));
//!
//! let percentage = between(0, 100);
//! assert!(percentage.check(&100));
//! assert!(!percentage.check(&101));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{and, not, or, And, Not, Or, Predicate, PredicateExt};
pub use number::{
    between, eq, ge, gt, le, lt, negative, non_negative, positive, Between, Eq, Ge, Gt, Le, Lt,
};
pub use string::{
    contains, len_between, len_eq, len_matches, len_max, len_min, not_blank, starts_with,
    Contains, LenBetween, LenMatches, NotBlank, StartsWith,
};
