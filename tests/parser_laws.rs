//! Property-based tests for the combinator laws.

use proptest::prelude::*;
use tribune::prelude::*;

/// Accepts even numbers, reporting odd ones.
fn even() -> impl Parser<Input = i32, Output = i32, Error = String> {
    identity::<i32, String>().filter(|n| n % 2 == 0, |n| format!("{n} is odd"))
}

proptest! {
    #[test]
    fn map_identity(n in any::<i32>()) {
        let mapped = even().map(|x| x);
        prop_assert_eq!(mapped.parse(&n), even().parse(&n));
    }

    #[test]
    fn map_composition(n in any::<i32>()) {
        let f = |x: i32| i64::from(x) * 3;
        let g = |x: i64| x.to_string();

        let chained = even().map(f).map(g);
        let fused = even().map(move |x| g(f(x)));
        prop_assert_eq!(chained.parse(&n), fused.parse(&n));
    }

    #[test]
    fn contramap_composition(s in "[a-z]{0,12}") {
        let len = |s: &String| s.chars().count() as i32;
        let twice = |n: &i32| n * 2;

        let chained = even().contramap(twice).contramap(len);
        let fused = even().contramap(move |s: &String| twice(&len(s)));
        prop_assert_eq!(chained.parse(&s), fused.parse(&s));
    }

    #[test]
    fn flat_map_of_valid_is_identity(n in any::<i32>()) {
        let p = identity::<i32, String>().flat_map(Validated::valid);
        prop_assert_eq!(p.parse(&n), Validated::valid(n));
    }

    #[test]
    fn flat_map_never_adds_to_an_earlier_failure(n in any::<i32>()) {
        let p = even().flat_map(|_| Validated::<i32, String>::invalid("step two".into()));
        let errors = p.parse(&n).errors().map(|e| e.len());
        prop_assert_eq!(errors, Some(1));
    }

    #[test]
    fn compose_reports_errors_in_declaration_order(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let field = |pick: fn(&(i32, i32, i32)) -> i32, name: &'static str| {
            even().map_err(move |e| format!("{name}: {e}")).contramap(move |t: &(i32, i32, i32)| pick(t))
        };
        let parser = compose(
            (field(|t| t.0, "a"), field(|t| t.1, "b"), field(|t| t.2, "c")),
            |a: i32, b: i32, c: i32| (a, b, c),
        );

        let expected: Vec<String> = [("a", a), ("b", b), ("c", c)]
            .into_iter()
            .filter(|(_, v)| v % 2 != 0)
            .map(|(name, v)| format!("{name}: {v} is odd"))
            .collect();

        match parser.parse(&(a, b, c)) {
            Validated::Valid(value) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(value, (a, b, c));
            }
            Validated::Invalid(errors) => prop_assert_eq!(errors.into_vec(), expected),
        }
    }

    #[test]
    fn repeated_keeps_every_valid_element(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let evens: Vec<i32> = values.iter().map(|v| v.wrapping_mul(2)).collect();
        prop_assert_eq!(even().repeated().parse(&evens), Validated::valid(evens.clone()));
    }

    #[test]
    fn repeated_reports_one_error_per_bad_element(values in prop::collection::vec(any::<i32>(), 1..20)) {
        let odd_count = values.iter().filter(|v| *v % 2 != 0).count();
        let result = even().repeated().parse(&values);
        prop_assert_eq!(result.error_count(), odd_count);
    }
}
