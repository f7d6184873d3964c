//! Lenient deserializers for numerically- and boolean-typed fields.
//!
//! Clients of the original API sent numbers and booleans both as JSON
//! primitives and as strings (`"100000"`, `"true"`). These helpers accept
//! either spelling so the schema types can stay strongly typed.

use serde::de::{Deserialize, Deserializer, Error};

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum MaybeInt {
    Int(i64),
    Str(String),
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum MaybeBool {
    Bool(bool),
    Int(i64),
    Str(String),
}

fn int_value<E: Error>(value: MaybeInt) -> Result<i32, E> {
    let wide = match value {
        MaybeInt::Int(i) => i,
        MaybeInt::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom("Value must be a number"))?,
    };

    i32::try_from(wide).map_err(|_| E::custom("Value must be a number"))
}

fn bool_value<E: Error>(value: MaybeBool) -> Result<bool, E> {
    match value {
        MaybeBool::Bool(b) => Ok(b),
        MaybeBool::Int(0) => Ok(false),
        MaybeBool::Int(1) => Ok(true),
        MaybeBool::Int(_) => Err(E::custom("Value must be boolean (1,0, true or false).")),
        MaybeBool::Str(s) => match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(E::custom("Value must be boolean (1,0, true or false).")),
        },
    }
}

/// Deserializes an `i32` from either a JSON number or a numeric string.
pub fn int_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    int_value(MaybeInt::deserialize(deserializer)?)
}

/// Deserializes an optional `i32`, accepting numbers and numeric strings.
pub fn int_lenient_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i32>, D::Error> {
    match Option::<MaybeInt>::deserialize(deserializer)? {
        Some(value) => int_value(value).map(Some),
        None => Ok(None),
    }
}

/// Deserializes a `bool` from a JSON boolean, `0`/`1`, or a boolean string.
pub fn bool_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    bool_value(MaybeBool::deserialize(deserializer)?)
}

/// Deserializes an optional `bool`, accepting booleans, `0`/`1`, and strings.
pub fn bool_lenient_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    match Option::<MaybeBool>::deserialize(deserializer)? {
        Some(value) => bool_value(value).map(Some),
        None => Ok(None),
    }
}
