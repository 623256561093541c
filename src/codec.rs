//! Purpose: Bind `Nullable` to serde's serialize/deserialize extension points.
//! Exports: None (trait impls only).
//! Role: The single seam between the data model and the host serializer.
//! Invariants: `Null` always serializes to the format's null token.
//! Invariants: `Unset` serializes to the payload type's default value; key
//! omission is the enclosing field's job via `skip_serializing_if`.
//! Invariants: Decode failures propagate untouched; no default substitution.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::nullable::Nullable;

impl<T> Serialize for Nullable<T>
where
    T: Serialize + Default,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Unset fields that were not skipped by the enclosing struct
            // keep the original wire convention: emit the default value.
            Nullable::Unset => T::default().serialize(serializer),
            Nullable::Null => serializer.serialize_none(),
            Nullable::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A key that is absent from the input never reaches this impl; the
        // enclosing struct's `#[serde(default)]` produces Unset for it.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        })
    }
}
