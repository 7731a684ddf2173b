//! Ordering predicates for numbers and other `PartialOrd` values.

use super::combinators::{Predicate, PredicateExt};

macro_rules! comparison {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(pub T);

        impl<T: PartialOrd + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        impl<T> PredicateExt for $name<T> {}

        $(#[$doc])*
        pub fn $ctor<T: PartialOrd + Send + Sync>(bound: T) -> $name<T> {
            $name(bound)
        }
    };
}

comparison!(
    /// Value equals the bound.
    Eq, eq, ==
);
comparison!(
    /// Value is strictly greater than the bound.
    Gt, gt, >
);
comparison!(
    /// Value is greater than or equal to the bound.
    Ge, ge, >=
);
comparison!(
    /// Value is strictly less than the bound.
    Lt, lt, <
);
comparison!(
    /// Value is less than or equal to the bound.
    Le, le, <=
);

/// Value lies in an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

impl<T> PredicateExt for Between<T> {}

/// Value lies in `min..=max`.
///
/// ```rust
/// use tribune::predicate::*;
///
/// let p = between(1, 200);
/// assert!(p.check(&1) && p.check(&200));
/// assert!(!p.check(&0) && !p.check(&201));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Greater than `T::default()`, i.e. zero for numbers.
pub fn positive<T: PartialOrd + Default + Send + Sync>() -> Gt<T> {
    Gt(T::default())
}

/// Less than `T::default()`.
pub fn negative<T: PartialOrd + Default + Send + Sync>() -> Lt<T> {
    Lt(T::default())
}

/// Greater than or equal to `T::default()`.
pub fn non_negative<T: PartialOrd + Default + Send + Sync>() -> Ge<T> {
    Ge(T::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons() {
        assert!(eq(5).check(&5));
        assert!(gt(5).check(&6) && !gt(5).check(&5));
        assert!(ge(5).check(&5) && !ge(5).check(&4));
        assert!(lt(5).check(&4) && !lt(5).check(&5));
        assert!(le(5).check(&5) && !le(5).check(&6));
    }

    #[test]
    fn between_is_inclusive() {
        let p = between(0.0_f64, 1.0);
        assert!(p.check(&0.0));
        assert!(p.check(&1.0));
        assert!(!p.check(&-0.1));
        assert!(!p.check(&1.1));
    }

    #[test]
    fn signs() {
        assert!(positive::<i32>().check(&1));
        assert!(!positive::<i32>().check(&0));
        assert!(negative::<f64>().check(&-0.5));
        assert!(!negative::<f64>().check(&0.0));
        assert!(non_negative::<i64>().check(&0));
        assert!(!non_negative::<i64>().check(&-1));
    }
}
