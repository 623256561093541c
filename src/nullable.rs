//! Purpose: Define the tri-state container and its inspection/mutation API.
//! Exports: `Nullable`, `NullableField`.
//! Role: The data model; serde wiring lives in `codec`, helpers in `field`.
//! Invariants: Exactly one state holds; the payload exists only in `Value`.
//! Invariants: Mutations are total state replacement, never merges.
//! Invariants: States are compared for equality only, never ordered.

use std::fmt;

/// A field value in one of three states: absent from the enclosing object,
/// explicitly `null`, or carrying a value of `T`.
///
/// The default is [`Nullable::Unset`], so a freshly constructed container and
/// a field whose key was missing from the input are indistinguishable — both
/// report `is_unset()`.
///
/// Fields meant to disappear from output when unset must carry the explicit
/// skip annotation; serialization itself cannot drop an enclosing key:
///
/// ```
/// use nullite::Nullable;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Patch {
///     #[serde(skip_serializing_if = "Nullable::is_unset")]
///     nickname: Nullable<String>,
///     #[serde(skip_serializing_if = "Nullable::is_unset")]
///     avatar_url: Nullable<String>,
/// }
///
/// let patch = Patch {
///     nickname: Nullable::Unset,
///     avatar_url: Nullable::Null,
/// };
/// assert_eq!(
///     serde_json::to_string(&patch).unwrap(),
///     r#"{"avatar_url":null}"#
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Nullable<T> {
    /// The field was not provided at all.
    #[default]
    Unset,
    /// The field was provided as an explicit `null`.
    Null,
    /// The field was provided with a concrete value.
    Value(T),
}

impl<T> Nullable<T> {
    /// True iff the field was provided as an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// True iff the field was provided in some form, as `null` or a value.
    pub fn is_set(&self) -> bool {
        !matches!(self, Nullable::Unset)
    }

    /// True iff the field was not provided. This is the predicate to hand to
    /// `#[serde(skip_serializing_if = "Nullable::is_unset")]`.
    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    /// The payload, if one is present. `Unset` and `Null` both yield `None`;
    /// callers that need to tell them apart use `is_null`/`is_unset`.
    pub fn get(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the payload, if one is present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Consume the container, keeping only the payload. The unset/null
    /// distinction is dropped.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The payload, or a panic if the state is `Unset` or `Null`.
    ///
    /// A panic here is a caller bug (a missing `is_set`/`get` check), not a
    /// recoverable condition; do not catch it to substitute a default.
    pub fn must_get(&self) -> &T {
        match self {
            Nullable::Value(value) => value,
            _ => panic!("value is not set or null"),
        }
    }

    /// Replace the state with `Value(value)`, whatever it was before.
    pub fn set(&mut self, value: T) {
        *self = Nullable::Value(value);
    }

    /// Replace the state with `Null`, whatever it was before.
    pub fn set_null(&mut self) {
        *self = Nullable::Null;
    }

    /// Replace the state with `Unset`, whatever it was before.
    pub fn reset(&mut self) {
        *self = Nullable::Unset;
    }

    /// Borrowing map over the payload; non-`Value` states pass through.
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Unset => Nullable::Unset,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(value),
        }
    }

    /// Map the payload type, preserving the state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Nullable::Unset => Nullable::Unset,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(f(value)),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

/// `Some` becomes `Value`, `None` becomes `Null`. An `Option` already went
/// through the two-state collapse, so "absent" is not recoverable from it;
/// use `Nullable::Unset` directly for fields that were never provided.
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullable::Unset => f.write_str("unset"),
            Nullable::Null => f.write_str("null"),
            Nullable::Value(value) => value.fmt(f),
        }
    }
}

/// Object-safe view over a [`Nullable`] of any payload type. Lets callers
/// inspect or clear the fields of a patch struct without knowing each
/// field's `T`.
pub trait NullableField {
    fn is_null(&self) -> bool;
    fn is_set(&self) -> bool;
    fn is_unset(&self) -> bool;
    fn set_null(&mut self);
    fn reset(&mut self);
}

impl<T> NullableField for Nullable<T> {
    fn is_null(&self) -> bool {
        Nullable::is_null(self)
    }

    fn is_set(&self) -> bool {
        Nullable::is_set(self)
    }

    fn is_unset(&self) -> bool {
        Nullable::is_unset(self)
    }

    fn set_null(&mut self) {
        Nullable::set_null(self);
    }

    fn reset(&mut self) {
        Nullable::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::{Nullable, NullableField};

    #[test]
    fn value_state_reports_set_and_payload() {
        let field = Nullable::Value("bar".to_string());
        assert!(field.is_set());
        assert!(!field.is_null());
        assert!(!field.is_unset());
        assert_eq!(field.get().map(String::as_str), Some("bar"));
        assert_eq!(field.must_get(), "bar");
    }

    #[test]
    fn null_state_reports_set_without_payload() {
        let field: Nullable<String> = Nullable::Null;
        assert!(field.is_set());
        assert!(field.is_null());
        assert!(!field.is_unset());
        assert_eq!(field.get(), None);
        assert_eq!(field.into_option(), None);
    }

    #[test]
    fn unset_state_matches_default() {
        let field: Nullable<u32> = Nullable::Unset;
        assert_eq!(field, Nullable::default());
        assert!(!field.is_set());
        assert!(!field.is_null());
        assert!(field.is_unset());
        assert_eq!(field.get(), None);
    }

    #[test]
    #[should_panic(expected = "value is not set or null")]
    fn must_get_panics_on_null() {
        let field: Nullable<i64> = Nullable::Null;
        field.must_get();
    }

    #[test]
    #[should_panic(expected = "value is not set or null")]
    fn must_get_panics_on_unset() {
        let field: Nullable<i64> = Nullable::Unset;
        field.must_get();
    }

    #[test]
    fn mutation_replaces_state_from_every_start() {
        let starts = [Nullable::Unset, Nullable::Null, Nullable::Value(7)];
        for start in starts {
            let mut field = start;
            field.set(42);
            assert_eq!(field, Nullable::Value(42));

            let mut field = start;
            field.set_null();
            assert_eq!(field, Nullable::Null);

            let mut field = start;
            field.reset();
            assert_eq!(field, Nullable::Unset);
        }
    }

    #[test]
    fn get_mut_edits_payload_in_place() {
        let mut field = Nullable::Value(vec![1, 2]);
        if let Some(values) = field.get_mut() {
            values.push(3);
        }
        assert_eq!(field, Nullable::Value(vec![1, 2, 3]));

        let mut empty: Nullable<Vec<i32>> = Nullable::Null;
        assert_eq!(empty.get_mut(), None);
    }

    #[test]
    fn equality_requires_same_state_and_payload() {
        assert_eq!(Nullable::Value(1), Nullable::Value(1));
        assert_ne!(Nullable::Value(0), Nullable::<i32>::Null);
        assert_ne!(Nullable::Value(0), Nullable::<i32>::Unset);
        assert_ne!(Nullable::<i32>::Null, Nullable::<i32>::Unset);
        assert_ne!(Nullable::Value(1), Nullable::Value(2));
    }

    #[test]
    fn conversions_from_value_and_option() {
        assert_eq!(Nullable::from(5u8), Nullable::Value(5u8));
        assert_eq!(Nullable::<&str>::from(Some("x")), Nullable::Value("x"));
        assert_eq!(Nullable::<&str>::from(None), Nullable::Null);
    }

    #[test]
    fn display_names_the_empty_states() {
        assert_eq!(Nullable::<i32>::Unset.to_string(), "unset");
        assert_eq!(Nullable::<i32>::Null.to_string(), "null");
        assert_eq!(Nullable::Value(5).to_string(), "5");
    }

    #[test]
    fn as_ref_borrows_payload() {
        let field = Nullable::Value("x".to_string());
        assert_eq!(field.as_ref().into_option(), Some(&"x".to_string()));
        assert!(Nullable::<String>::Null.as_ref().is_null());
        assert!(Nullable::<String>::Unset.as_ref().is_unset());
    }

    #[test]
    fn map_preserves_state() {
        assert_eq!(Nullable::Value(2).map(|n| n * 10), Nullable::Value(20));
        assert_eq!(Nullable::<i32>::Null.map(|n| n * 10), Nullable::Null);
        assert_eq!(Nullable::<i32>::Unset.map(|n| n * 10), Nullable::Unset);
    }

    #[test]
    fn trait_object_clears_fields_without_payload_type() {
        let mut name: Nullable<String> = Nullable::Value("bar".to_string());
        let mut age: Nullable<u32> = Nullable::Null;
        let fields: Vec<&mut dyn NullableField> = vec![&mut name, &mut age];
        for field in fields {
            field.reset();
        }
        assert!(name.is_unset());
        assert!(age.is_unset());
    }
}
