//! Contramap combinator - adapts the input type.

use std::marker::PhantomData;

use crate::parser::trait_def::Parser;
use crate::Validated;

/// Feeds the inner parser a value projected out of a larger input.
///
/// Typically used to pick one field out of a record before handing it to a
/// field parser.
pub struct Contramap<P, F, I2> {
    pub(crate) inner: P,
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<fn(&I2)>,
}

impl<P: Clone, F: Clone, I2> Clone for Contramap<P, F, I2> {
    fn clone(&self) -> Self {
        Contramap {
            inner: self.inner.clone(),
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: std::fmt::Debug, F, I2> std::fmt::Debug for Contramap<P, F, I2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contramap")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<P, F, I2> Parser for Contramap<P, F, I2>
where
    P: Parser,
    F: Fn(&I2) -> P::Input,
{
    type Input = I2;
    type Output = P::Output;
    type Error = P::Error;

    #[inline]
    fn parse(&self, input: &I2) -> Validated<Self::Output, Self::Error> {
        let projected = (self.f)(input);
        self.inner.parse(&projected)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    struct Form {
        name: String,
        age: String,
    }

    fn form() -> Form {
        Form {
            name: "Ada".to_string(),
            age: "36".to_string(),
        }
    }

    #[test]
    fn contramap_projects_field() {
        let name = identity::<String, &str>().contramap(|f: &Form| f.name.clone());
        let age = identity::<String, &str>().contramap(|f: &Form| f.age.clone());

        assert_eq!(name.parse(&form()), Validated::valid("Ada".to_string()));
        assert_eq!(age.parse(&form()), Validated::valid("36".to_string()));
    }

    #[test]
    fn contramap_applies_outer_projection_first() {
        let len = identity::<usize, ()>();
        let composed = len
            .contramap(|s: &String| s.len())
            .contramap(|f: &Form| f.name.clone());

        assert_eq!(composed.parse(&form()), Validated::valid(3));
    }
}
