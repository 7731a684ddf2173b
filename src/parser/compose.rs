//! N-ary applicative composition.
//!
//! [`compose`] runs several independent parsers against the same input and
//! builds one value from their outputs. Unlike chaining with
//! [`flat_map`](crate::parser::ParserExt::flat_map), every sub-parser runs
//! even when an earlier one failed, and all their errors are reported in
//! declaration order.
//!
//! # Example
//!
//! ```rust
//! use tribune::prelude::*;
//!
//! struct Input {
//!     name: String,
//!     age: i32,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! let name = identity::<String, &str>()
//!     .filter(|s| !s.trim().is_empty(), |_| "name is blank")
//!     .contramap(|i: &Input| i.name.clone());
//! let age = identity::<i32, &str>()
//!     .filter(|n| (0..=150).contains(n), |_| "age out of range")
//!     .map(|n| n as u8)
//!     .contramap(|i: &Input| i.age);
//!
//! let person = compose((name, age), |name, age| Person { name, age });
//!
//! let ok = person.parse(&Input { name: "Ada".into(), age: 36 });
//! assert_eq!(ok, Validated::valid(Person { name: "Ada".into(), age: 36 }));
//!
//! let bad = person.parse(&Input { name: " ".into(), age: 200 });
//! assert_eq!(bad.unwrap_errors(), vec!["name is blank", "age out of range"]);
//! ```

use std::fmt;

use crate::parser::trait_def::Parser;
use crate::validated::ValidateAll;
use crate::Validated;

/// A tuple of parsers sharing input and error types.
///
/// Implemented for tuples of 1 to 12 parsers. There is no implementation
/// for `()`, so composing zero parsers does not compile.
pub trait ParserTuple {
    /// Shared input type.
    type Input;
    /// Shared error type.
    type Error;
    /// Tuple of the individual outputs.
    type Outputs;

    /// Run every parser in order and combine the outcomes.
    fn parse_all(&self, input: &Self::Input) -> Validated<Self::Outputs, Self::Error>;
}

/// A function that builds a value from a tuple of parsed fields.
///
/// Implemented for every `Fn(A1, ..., An) -> O` with `Args = (A1, ..., An)`,
/// so plain functions, closures and tuple-struct constructors all work.
pub trait Constructor<Args> {
    /// Value built.
    type Output;

    /// Spread `args` into the function.
    fn construct(&self, args: Args) -> Self::Output;
}

/// Parser built by [`compose`].
#[derive(Clone)]
pub struct Compose<Ps, C> {
    parsers: Ps,
    constructor: C,
}

impl<Ps: fmt::Debug, C> fmt::Debug for Compose<Ps, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("parsers", &self.parsers)
            .field("constructor", &"<function>")
            .finish()
    }
}

impl<Ps, C> Parser for Compose<Ps, C>
where
    Ps: ParserTuple,
    C: Constructor<Ps::Outputs>,
{
    type Input = Ps::Input;
    type Output = C::Output;
    type Error = Ps::Error;

    fn parse(&self, input: &Self::Input) -> Validated<Self::Output, Self::Error> {
        self.parsers
            .parse_all(input)
            .map(|outputs| self.constructor.construct(outputs))
    }
}

/// Combine independent parsers into one record parser.
///
/// On `parse`, every parser in `parsers` runs against the input, left to
/// right. If all succeed the outputs are passed to `constructor`; otherwise
/// the result holds the errors of every failing parser, concatenated in tuple
/// order. Each parser usually selects its own field with
/// [`contramap`](crate::parser::ParserExt::contramap); overlapping
/// projections are allowed.
pub fn compose<Ps, C>(parsers: Ps, constructor: C) -> Compose<Ps, C>
where
    Ps: ParserTuple,
    C: Constructor<Ps::Outputs>,
{
    Compose {
        parsers,
        constructor,
    }
}

macro_rules! impl_compose_tuple {
    ($P1:ident $p1:ident $a1:ident $(, $P:ident $p:ident $a:ident)*) => {
        impl<$P1, $($P),*> ParserTuple for ($P1, $($P,)*)
        where
            $P1: Parser,
            $($P: Parser<Input = $P1::Input, Error = $P1::Error>,)*
        {
            type Input = $P1::Input;
            type Error = $P1::Error;
            type Outputs = ($P1::Output, $($P::Output,)*);

            fn parse_all(&self, input: &Self::Input) -> Validated<Self::Outputs, Self::Error> {
                let ($p1, $($p,)*) = self;
                ($p1.parse(input), $($p.parse(input),)*).validate_all()
            }
        }

        impl<Func, Out, $a1, $($a),*> Constructor<($a1, $($a,)*)> for Func
        where
            Func: Fn($a1, $($a),*) -> Out,
        {
            type Output = Out;

            fn construct(&self, ($p1, $($p,)*): ($a1, $($a,)*)) -> Out {
                (self)($p1, $($p),*)
            }
        }
    };
}

impl_compose_tuple!(P1 p1 A1);
impl_compose_tuple!(P1 p1 A1, P2 p2 A2);
impl_compose_tuple!(P1 p1 A1, P2 p2 A2, P3 p3 A3);
impl_compose_tuple!(P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4);
impl_compose_tuple!(P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5);
impl_compose_tuple!(P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6);
impl_compose_tuple!(P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6, P7 p7 A7);
impl_compose_tuple!(
    P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6, P7 p7 A7, P8 p8 A8
);
impl_compose_tuple!(
    P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6, P7 p7 A7, P8 p8 A8, P9 p9 A9
);
impl_compose_tuple!(
    P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6, P7 p7 A7, P8 p8 A8, P9 p9 A9,
    P10 p10 A10
);
impl_compose_tuple!(
    P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6, P7 p7 A7, P8 p8 A8, P9 p9 A9,
    P10 p10 A10, P11 p11 A11
);
impl_compose_tuple!(
    P1 p1 A1, P2 p2 A2, P3 p3 A3, P4 p4 A4, P5 p5 A5, P6 p6 A6, P7 p7 A7, P8 p8 A8, P9 p9 A9,
    P10 p10 A10, P11 p11 A11, P12 p12 A12
);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::prelude::*;

    fn fails_with(error: &'static str) -> impl Parser<Input = i32, Output = i32, Error = &'static str> {
        from_fn(move |_: &i32| Validated::invalid(error))
    }

    fn succeeds() -> impl Parser<Input = i32, Output = i32, Error = &'static str> {
        identity::<i32, &'static str>()
    }

    #[test]
    fn compose_all_valid_calls_constructor() {
        let p = compose(
            (succeeds(), succeeds().map(|x| x + 1), succeeds().map(|x| x * 10)),
            |a: i32, b: i32, c: i32| (a, b, c),
        );
        assert_eq!(p.parse(&2), Validated::valid((2, 3, 20)));
    }

    #[test]
    fn compose_accumulates_in_declaration_order() {
        let p = compose(
            (fails_with("e1"), succeeds(), fails_with("e3")),
            |a: i32, b: i32, c: i32| a + b + c,
        );

        let errors = p.parse(&0).unwrap_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors, vec!["e1", "e3"]);
    }

    #[test]
    fn compose_runs_every_parser_after_a_failure() {
        let calls = AtomicUsize::new(0);
        let counted = from_fn(|n: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            Validated::<i32, &str>::valid(*n)
        });

        let p = compose((fails_with("first"), &counted, &counted), |a: i32, b: i32, c: i32| {
            a + b + c
        });

        assert_eq!(p.parse(&1).unwrap_errors(), vec!["first"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn compose_keeps_multi_error_sub_results() {
        let two_errors = from_fn(|_: &i32| {
            Validated::<i32, _>::invalid_all(NonEmptyVec::new("a1", vec!["a2"]))
        });
        let p = compose((two_errors, fails_with("b")), |a: i32, b: i32| a + b);

        assert_eq!(p.parse(&0).unwrap_errors(), vec!["a1", "a2", "b"]);
    }

    #[test]
    fn compose_single_parser() {
        let p = compose((succeeds(),), |a: i32| a.to_string());
        assert_eq!(p.parse(&9), Validated::valid("9".to_string()));
    }

    #[test]
    fn compose_twelve_parsers() {
        let p = compose(
            (
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                succeeds(),
                fails_with("last"),
            ),
            |a: i32,
             b: i32,
             c: i32,
             d: i32,
             e: i32,
             f: i32,
             g: i32,
             h: i32,
             i: i32,
             j: i32,
             k: i32,
             l: i32| a + b + c + d + e + f + g + h + i + j + k + l,
        );
        assert_eq!(p.parse(&1).unwrap_errors(), vec!["last"]);
    }

    #[test]
    fn compose_accepts_fn_items() {
        fn pair(a: i32, b: i32) -> (i32, i32) {
            (a, b)
        }

        let p = compose((succeeds(), succeeds().map(|x| -x)), pair);
        assert_eq!(p.parse(&4), Validated::valid((4, -4)));
    }

    #[test]
    fn composed_parsers_nest() {
        let inner = compose((succeeds(), fails_with("inner")), |a: i32, b: i32| a + b);
        let outer = compose((fails_with("outer"), inner), |a: i32, b: i32| a * b);

        assert_eq!(outer.parse(&0).unwrap_errors(), vec!["outer", "inner"]);
    }
}
