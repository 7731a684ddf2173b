//! Serde support (feature-gated)
//!
//! [`NonEmptyVec`] serializes as a plain sequence. Deserializing an empty
//! sequence fails, so a deserialized `Invalid` always carries an error.
//! [`Validated`](crate::Validated) and [`ContextError`](crate::ContextError)
//! derive their impls.
//!
//! # Example
//!
//! ```rust,ignore
//! use tribune::{NonEmptyVec, Validated};
//!
//! let result = Validated::<i32, String>::invalid("blank".to_string());
//! let json = serde_json::to_string(&result).unwrap();
//! assert_eq!(json, r#"{"Invalid":["blank"]}"#);
//!
//! let empty: Result<NonEmptyVec<i32>, _> = serde_json::from_str("[]");
//! assert!(empty.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::NonEmptyVec;

impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(items)
            .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ContextError, NonEmptyVec, Validated};

    #[test]
    fn non_empty_vec_is_a_sequence() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(serde_json::to_string(&nev).unwrap(), "[1,2,3]");

        let back: NonEmptyVec<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(back, nev);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let result: Result<NonEmptyVec<i32>, _> = serde_json::from_str("[]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least one element"));
    }

    #[test]
    fn validated_is_externally_tagged() {
        let valid = Validated::<i32, String>::valid(42);
        assert_eq!(serde_json::to_string(&valid).unwrap(), r#"{"Valid":42}"#);

        let invalid = Validated::<i32, String>::invalid("blank".to_string());
        let json = serde_json::to_string(&invalid).unwrap();
        assert_eq!(json, r#"{"Invalid":["blank"]}"#);

        let back: Validated<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invalid);
    }

    #[test]
    fn invalid_with_no_errors_is_rejected() {
        let result: Result<Validated<i32, String>, _> = serde_json::from_str(r#"{"Invalid":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn context_error_keeps_its_trail() {
        let err = ContextError::new("blank".to_string()).context("title");
        let json = serde_json::to_string(&err).unwrap();
        let back: ContextError<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
        assert_eq!(back.path(), "title");
    }
}
