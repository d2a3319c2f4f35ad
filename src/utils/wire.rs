//! Null-tolerant decoding helpers for wire mappings.
//!
//! The API freely interchanges absent keys, explicit `null`, and empty
//! objects. These helpers pin down the two normalization rules the typed
//! layer relies on: collections are never `null` (only empty), and nested
//! multi-field objects exist only when the source mapping has at least one
//! key.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decode a collection field where the source may be absent or `null`.
///
/// Both decode to an empty `Vec`, never `None`. Pair with
/// `#[serde(default)]` to cover the absent-key case.
pub(crate) fn null_to_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a nested object field that is constructed only if non-empty.
///
/// `null` and `{}` both decode to `None`; a mapping with at least one key
/// decodes to `Some(T)` with `T`'s own defaults filling the gaps. This keeps
/// "no geolocation data" distinct from "geolocation data with null fields".
pub(crate) fn object_if_non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(map) if map.is_empty() => Ok(None),
        Some(map) => serde_json::from_value(Value::Object(map))
            .map(Some)
            .map_err(Error::custom),
    }
}
