//! Purpose: Tri-state nullable field type for serde-backed JSON interchange.
//! Exports: `Nullable`, `NullableField`, and the `field` constructor helpers.
//! Role: Public library crate; the whole API surface is intentionally small.
//! Invariants: `Nullable` stays a plain value type with no hidden state.
//! Invariants: Wire behavior is defined entirely by the serde impls in `codec`.
//!
//! A JSON field backed by [`Nullable<T>`] distinguishes three states that a
//! plain `Option<T>` collapses into two:
//!
//! - the key is absent from the object ([`Nullable::Unset`]),
//! - the key is present with the `null` literal ([`Nullable::Null`]),
//! - the key is present with a value ([`Nullable::Value`]).
//!
//! The distinction matters for partial-update payloads, where "leave this
//! field alone" and "clear this field" are different instructions.
//!
//! ```
//! use nullite::Nullable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "Nullable::is_unset")]
//!     name: Nullable<String>,
//! }
//!
//! let patch: Patch = serde_json::from_str(r#"{"name":null}"#).unwrap();
//! assert!(patch.name.is_null());
//!
//! let untouched: Patch = serde_json::from_str("{}").unwrap();
//! assert!(untouched.name.is_unset());
//! assert_eq!(serde_json::to_string(&untouched).unwrap(), "{}");
//! ```

mod codec;
pub mod field;
pub mod nullable;

pub use nullable::{Nullable, NullableField};
