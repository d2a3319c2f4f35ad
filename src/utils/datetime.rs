//! Timestamp (de)serialization for API payloads.
//!
//! Serde `with`-module for `Option<DateTime<Utc>>` fields:
//! - serialization: `DateTime<Utc>` -> RFC 3339 string
//! - deserialization: ISO-8601 string or `null` -> `Option<DateTime<Utc>>`
//!
//! The API ships timestamps as ISO-8601 strings, usually with a trailing `Z`
//! or an explicit numeric offset, sometimes with fractional seconds, and on a
//! few endpoints with no offset at all (taken as UTC). A string that parses
//! as none of these is a hard error: a malformed timestamp means the API
//! contract changed, and that should surface rather than be swallowed.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Accepts a trailing `Z`, an explicit numeric UTC offset, or no offset
/// (interpreted as UTC), each with an optional fractional-seconds component
/// of any digit length. Fractional seconds are retained.
pub fn parse(s: &str) -> chrono::ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
}

/// Serialize `Option<DateTime<Utc>>` as an optional RFC 3339 string.
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional ISO-8601 string into `Option<DateTime<Utc>>`.
///
/// `null` and absent both yield `None`; a malformed string is an error that
/// names the offending value.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse(&s)
            .map(Some)
            .map_err(|e| Error::custom(format!("invalid timestamp '{s}': {e}"))),
        None => Ok(None),
    }
}
