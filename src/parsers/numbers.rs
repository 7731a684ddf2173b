//! Range checks for parsers producing ordered values.

use std::ops::RangeInclusive;

use crate::parser::combinators::Ensure;
use crate::parser::{Parser, ParserExt};
use crate::predicate::{self, Between, Ge, Gt, Le, Lt};

/// Range checks for any parser whose output is ordered.
///
/// "Zero" is the output type's `Default`, which is what the integer and
/// float types use.
///
/// # Example
///
/// ```rust
/// use tribune::prelude::*;
///
/// let age = identity::<i32, String>().in_range(1..=200, |n| format!("{n} is not an age"));
/// assert_eq!(age.parse(&42), Validated::valid(42));
/// assert_eq!(age.parse(&0), Validated::invalid("0 is not an age".to_string()));
/// ```
pub trait NumberParserExt: Parser + Sized
where
    Self::Output: PartialOrd + Send + Sync,
{
    /// Require a value strictly above zero.
    fn positive<G>(self, if_error: G) -> Ensure<Self, Gt<Self::Output>, G>
    where
        Self::Output: Default,
        G: Fn(&Self::Output) -> Self::Error,
    {
        self.ensure(predicate::positive(), if_error)
    }

    /// Require a value strictly below zero.
    fn negative<G>(self, if_error: G) -> Ensure<Self, Lt<Self::Output>, G>
    where
        Self::Output: Default,
        G: Fn(&Self::Output) -> Self::Error,
    {
        self.ensure(predicate::negative(), if_error)
    }

    /// Require zero or above.
    fn non_negative<G>(self, if_error: G) -> Ensure<Self, Ge<Self::Output>, G>
    where
        Self::Output: Default,
        G: Fn(&Self::Output) -> Self::Error,
    {
        self.ensure(predicate::non_negative(), if_error)
    }

    /// Require a value inside `range`, both ends included.
    fn in_range<G>(
        self,
        range: RangeInclusive<Self::Output>,
        if_error: G,
    ) -> Ensure<Self, Between<Self::Output>, G>
    where
        G: Fn(&Self::Output) -> Self::Error,
    {
        let (min, max) = range.into_inner();
        self.ensure(predicate::between(min, max), if_error)
    }

    /// Require at least `bound`.
    fn at_least<G>(self, bound: Self::Output, if_error: G) -> Ensure<Self, Ge<Self::Output>, G>
    where
        G: Fn(&Self::Output) -> Self::Error,
    {
        self.ensure(predicate::ge(bound), if_error)
    }

    /// Require at most `bound`.
    fn at_most<G>(self, bound: Self::Output, if_error: G) -> Ensure<Self, Le<Self::Output>, G>
    where
        G: Fn(&Self::Output) -> Self::Error,
    {
        self.ensure(predicate::le(bound), if_error)
    }
}

impl<P> NumberParserExt for P
where
    P: Parser,
    P::Output: PartialOrd + Send + Sync,
{
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn in_range_matches_inclusive_bounds() {
        let p = identity::<i32, &str>().in_range(1..=200, |_| "suck!");
        assert_eq!(p.parse(&1), Validated::valid(1));
        assert_eq!(p.parse(&200), Validated::valid(200));
        assert_eq!(p.parse(&0).unwrap_errors(), vec!["suck!"]);
        assert_eq!(p.parse(&201).unwrap_errors(), vec!["suck!"]);
    }

    #[test]
    fn sign_checks_on_doubles() {
        let pos = identity::<f64, &str>().positive(|_| "not positive");
        assert!(pos.parse(&0.5).is_valid());
        assert!(pos.parse(&0.0).is_invalid());

        let neg = identity::<f64, &str>().negative(|_| "not negative");
        assert!(neg.parse(&-0.5).is_valid());
        assert!(neg.parse(&0.0).is_invalid());

        let non_neg = identity::<f64, &str>().non_negative(|_| "negative");
        assert!(non_neg.parse(&0.0).is_valid());
        assert!(non_neg.parse(&-1.0).is_invalid());
    }

    #[test]
    fn bounds_report_the_value() {
        let p = identity::<i64, String>()
            .at_least(10, |n| format!("{n} < 10"))
            .at_most(20, |n| format!("{n} > 20"));

        assert_eq!(p.parse(&15), Validated::valid(15));
        assert_eq!(p.parse(&9).unwrap_errors(), vec!["9 < 10".to_string()]);
        assert_eq!(p.parse(&21).unwrap_errors(), vec!["21 > 20".to_string()]);
    }

    #[test]
    fn composes_with_string_conversion() {
        let p = identity::<String, &str>()
            .double(|_| "not a double")
            .in_range(0.0..=1.0, |_| "out of range");

        assert_eq!(p.parse(&"0.25".to_string()), Validated::valid(0.25));
        assert_eq!(p.parse(&"2".to_string()).unwrap_errors(), vec!["out of range"]);
        assert_eq!(p.parse(&"x".to_string()).unwrap_errors(), vec!["not a double"]);
    }
}
