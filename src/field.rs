//! Purpose: Typed constructor shorthands for common payload types.
//! Exports: `string`, `int`, `int32`, `uint`, `boolean`, `float`, `float32`,
//! `timestamp`.
//! Role: Pass-through conveniences over `Nullable::Value`; no contract of
//! their own.

use time::OffsetDateTime;

use crate::nullable::Nullable;

pub fn string(value: impl Into<String>) -> Nullable<String> {
    Nullable::Value(value.into())
}

pub fn int(value: i64) -> Nullable<i64> {
    Nullable::Value(value)
}

pub fn int32(value: i32) -> Nullable<i32> {
    Nullable::Value(value)
}

pub fn uint(value: u64) -> Nullable<u64> {
    Nullable::Value(value)
}

pub fn boolean(value: bool) -> Nullable<bool> {
    Nullable::Value(value)
}

pub fn float(value: f64) -> Nullable<f64> {
    Nullable::Value(value)
}

pub fn float32(value: f32) -> Nullable<f32> {
    Nullable::Value(value)
}

pub fn timestamp(value: OffsetDateTime) -> Nullable<OffsetDateTime> {
    Nullable::Value(value)
}
