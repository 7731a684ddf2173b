//! Non-empty vector used to carry validation errors
//!
//! An `Invalid` outcome always holds at least one error. Storing the errors in
//! a [`NonEmptyVec`] makes that a property of the type rather than a runtime
//! check: there is no way to build an empty one.
//!
//! # Examples
//!
//! ```
//! use tribune::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("title is blank", vec!["isbn too short"]);
//! assert_eq!(errors.head(), &"title is blank");
//! assert_eq!(errors.len(), 2);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// Element order is preserved by every operation, which is what lets
/// accumulated errors report in declaration order.
///
/// # Example
///
/// ```
/// use tribune::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(1, vec![2, 3]);
/// assert_eq!(nev.into_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from its first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding exactly one element.
    ///
    /// # Example
    ///
    /// ```
    /// use tribune::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("must not be blank");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to build a non-empty vector from a `Vec`.
    ///
    /// Returns `None` when `vec` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use tribune::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// First element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// All elements after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to pair with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Append every element of `other`, keeping its order.
    ///
    /// # Example
    ///
    /// ```
    /// use tribune::NonEmptyVec;
    ///
    /// let mut errors = NonEmptyVec::singleton("a");
    /// errors.append(NonEmptyVec::new("b", vec!["c"]));
    /// assert_eq!(errors, vec!["a", "b", "c"]);
    /// ```
    pub fn append(&mut self, other: NonEmptyVec<T>) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Transform every element, keeping the order.
    ///
    /// # Example
    ///
    /// ```
    /// use tribune::NonEmptyVec;
    ///
    /// let lengths = NonEmptyVec::new("ab", vec!["cde"]).map(str::len);
    /// assert_eq!(lengths, vec![2, 3]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(f).collect())
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for NonEmptyVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            n => &self.tail[n - 1],
        }
    }
}
