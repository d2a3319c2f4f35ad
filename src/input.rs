//! Sparse record input for create/update calls.
//!
//! The API applies partial updates: a key that is present in the request body
//! is written (including an explicit `null`), and a key that is absent is
//! left untouched. `false`, `0`, and `""` are all legitimate values to write,
//! so a plain `Option` cannot represent "never assigned" — [`Field`] adds the
//! third state.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::enums::{MonitorType, RecordType, SmartRoutingType};
use crate::error::{ModelError, Result};
use crate::types::EnvironmentalVariable;

/// Tri-state slot for a writable API field.
///
/// - `Unset` (the default): the field was never assigned and produces no key
///   on serialization.
/// - `Null`: the field is explicitly cleared and serializes as JSON `null`.
/// - `Set(value)`: the field serializes as its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Never assigned; skipped during serialization.
    Unset,
    /// Explicitly cleared; serializes as `null`.
    Null,
    /// Explicitly assigned.
    Set(T),
}

impl<T> Field<T> {
    /// Whether this field was never assigned.
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The assigned value, if any.
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }
}

// Manual impl: the derive would demand `T: Default`, which the enum types
// backing record fields do not and should not have.
impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            // Unset is skipped via skip_serializing_if; serializing it
            // anyway degrades to null rather than inventing a value.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Set(v) => v.serialize(serializer),
        }
    }
}

/// Mutable input for creating or updating a DNS record.
///
/// Assign only the fields the call should write; everything left at
/// [`Field::Unset`] is omitted from the request body, which is what gives
/// partial updates their semantics. Enum fields are emitted as integer wire
/// codes.
///
/// ```rust
/// use bunny_dns::{DnsRecordInput, Field, RecordType};
///
/// let mut input = DnsRecordInput::new();
/// input.record_type = Field::Set(RecordType::A);
/// input.value = Field::Set("1.2.3.4".to_string());
/// input.ttl = Field::Set(300);
///
/// let body = input.to_wire()?;
/// assert_eq!(body.len(), 3);
/// assert_eq!(body["Type"], 0);
/// # Ok::<(), bunny_dns::ModelError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsRecordInput {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<i64>,
    #[serde(rename = "Type", skip_serializing_if = "Field::is_unset")]
    pub record_type: Field<RecordType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub ttl: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub value: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub weight: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub priority: Field<i64>,
    /// CAA flags; the only range-validated field (`0..=255`).
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub flags: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub tag: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub port: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub pull_zone_id: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub script_id: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub accelerated: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub monitor_type: Field<MonitorType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub geolocation_latitude: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub geolocation_longitude: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub latency_zone: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub smart_routing_type: Field<SmartRoutingType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub disabled: Field<bool>,
    /// Serialized under the upstream API's misspelled key
    /// `EnviromentalVariables`, which must be reproduced byte-for-byte.
    #[serde(
        rename = "EnviromentalVariables",
        skip_serializing_if = "Field::is_unset"
    )]
    pub environmental_variables: Field<Vec<EnvironmentalVariable>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub comment: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub auto_ssl_issuance: Field<bool>,
}

impl DnsRecordInput {
    /// An input with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to the sparse wire mapping the API expects.
    ///
    /// Emits exactly one key per explicitly assigned field, with enum values
    /// as integer codes. An input with nothing assigned yields `{}`.
    ///
    /// # Errors
    ///
    /// [`ModelError::FlagsOutOfRange`] if `flags` is set outside `0..=255`.
    /// The check runs before serialization so an invalid body is never built.
    pub fn to_wire(&self) -> Result<Map<String, Value>> {
        if let Field::Set(flags) = &self.flags
            && !(0..=255).contains(flags)
        {
            return Err(ModelError::FlagsOutOfRange(*flags));
        }

        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            // A struct always serializes to a JSON object.
            _ => Ok(Map::new()),
        }
    }
}
