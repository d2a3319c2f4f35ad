//! Integer-coded wire enums and their lenient (de)serialization.
//!
//! Every enum field in the bunny.net DNS API is backed by a fixed integer
//! code, but different endpoints inconsistently return either the code or the
//! display name. [`WireEnum`] captures the dual lookup; the [`lenient`] and
//! [`lenient_or_default`] serde modules apply it per field and never fail —
//! an unrecognized value degrades to absence instead of poisoning the whole
//! payload.
//!
//! The codes are a compatibility contract with the upstream service and must
//! not be renumbered.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// An enum with a fixed integer wire code and a display name.
pub trait WireEnum: Sized + Copy {
    /// Type name used in degrade warnings.
    const NAME: &'static str;

    /// The integer code sent on the wire.
    fn code(self) -> i64;

    /// Look up a variant by its integer code.
    fn from_code(code: i64) -> Option<Self>;

    /// Look up a variant by its display name, case-insensitively.
    fn from_name(name: &str) -> Option<Self>;

    /// The canonical display name.
    fn as_str(self) -> &'static str;
}

fn decode_wire_value<E: WireEnum>(value: &Value) -> Option<E> {
    match value {
        Value::Number(n) => n.as_i64().and_then(E::from_code),
        Value::String(s) => E::from_name(s),
        _ => None,
    }
}

/// Serde module for `Option<E>` enum fields.
///
/// Accepts an integer code, a case-insensitive display name, or `null`;
/// anything unrecognized decodes to `None` with a warning. Serializes as the
/// integer code (never the display string).
pub(crate) mod lenient {
    use super::{Deserialize, Deserializer, Serializer, Value, WireEnum, decode_wire_value};

    pub fn serialize<S, E>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        E: WireEnum,
    {
        match value {
            Some(v) => serializer.serialize_i64(v.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, E>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        D: Deserializer<'de>,
        E: WireEnum,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => {
                let parsed = decode_wire_value::<E>(&raw);
                if parsed.is_none() {
                    log::warn!("unrecognized {} wire value: {raw}", E::NAME);
                }
                Ok(parsed)
            }
        }
    }
}

/// Serde module for enum fields that fall back to their default variant.
///
/// The record-status enums (`MonitorStatus`, `MonitorType`,
/// `SmartRoutingType`, `AccelerationStatus`) have a code-0 "none" variant
/// that stands in for absent, null, or unrecognized wire values.
pub(crate) mod lenient_or_default {
    use super::{Deserialize, Deserializer, Serializer, Value, WireEnum, decode_wire_value};

    pub fn serialize<S, E>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        E: WireEnum,
    {
        serializer.serialize_i64(value.code())
    }

    pub fn deserialize<'de, D, E>(deserializer: D) -> Result<E, D::Error>
    where
        D: Deserializer<'de>,
        E: WireEnum + Default,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(E::default()),
            Some(raw) => {
                let parsed = decode_wire_value::<E>(&raw);
                if parsed.is_none() {
                    log::warn!("unrecognized {} wire value: {raw}", E::NAME);
                }
                Ok(parsed.unwrap_or_default())
            }
        }
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($wire) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// DNS record type.
    ///
    /// Beyond the standard resource record types, bunny.net supports a few
    /// CDN-specific pseudo-records (`Redirect`, `Flatten`, `PullZone`,
    /// `Script`).
    pub enum RecordType {
        A = 0 => "A",
        Aaaa = 1 => "AAAA",
        Cname = 2 => "CNAME",
        Txt = 3 => "TXT",
        Mx = 4 => "MX",
        /// HTTP redirect pseudo-record.
        Redirect = 5 => "Redirect",
        /// CNAME flattening at the zone apex.
        Flatten = 6 => "Flatten",
        /// Record pointing at a bunny.net pull zone.
        PullZone = 7 => "PullZone",
        Srv = 8 => "SRV",
        Caa = 9 => "CAA",
        Ptr = 10 => "PTR",
        /// Record handled by an edge script.
        Script = 11 => "Script",
        Ns = 12 => "NS",
    }
}

wire_enum! {
    /// Health state reported by record monitoring.
    pub enum MonitorStatus {
        Unknown = 0 => "Unknown",
        Online = 1 => "Online",
        Offline = 2 => "Offline",
    }
}

wire_enum! {
    /// Kind of health monitoring attached to a record.
    pub enum MonitorType {
        None = 0 => "None",
        Ping = 1 => "Ping",
        Http = 2 => "Http",
        Monitor = 3 => "Monitor",
    }
}

wire_enum! {
    /// Smart-routing strategy for multi-value records.
    pub enum SmartRoutingType {
        None = 0 => "None",
        Latency = 1 => "Latency",
        Geolocation = 2 => "Geolocation",
    }
}

wire_enum! {
    /// Progress of CDN acceleration setup for a record.
    pub enum AccelerationStatus {
        None = 0 => "None",
        Pending = 1 => "Pending",
        Completed = 2 => "Completed",
        Failed = 3 => "Failed",
    }
}

wire_enum! {
    /// How client IPs are anonymized in zone query logs.
    pub enum LogAnonymizationType {
        /// Drop the last octet of the address.
        OneDigit = 0 => "OneDigit",
        /// Drop the address entirely.
        Drop = 1 => "Drop",
    }
}

wire_enum! {
    /// Key type used for certificates issued on linked records.
    pub enum CertificateKeyType {
        Ecdsa = 0 => "Ecdsa",
        Rsa = 1 => "Rsa",
    }
}

impl Default for MonitorStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Default for MonitorType {
    fn default() -> Self {
        Self::None
    }
}

impl Default for SmartRoutingType {
    fn default() -> Self {
        Self::None
    }
}

impl Default for AccelerationStatus {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        #[serde(default, with = "super::lenient")]
        record_type: Option<RecordType>,
        #[serde(default, with = "super::lenient_or_default")]
        monitor_status: MonitorStatus,
    }

    fn probe(value: serde_json::Value) -> Probe {
        let res: serde_json::Result<Probe> = serde_json::from_value(value);
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        res.unwrap_or(Probe {
            record_type: None,
            monitor_status: MonitorStatus::Unknown,
        })
    }

    #[test]
    fn from_code_known() {
        assert_eq!(RecordType::from_code(0), Some(RecordType::A));
        assert_eq!(RecordType::from_code(4), Some(RecordType::Mx));
        assert_eq!(RecordType::from_code(12), Some(RecordType::Ns));
        assert_eq!(MonitorType::from_code(2), Some(MonitorType::Http));
        assert_eq!(SmartRoutingType::from_code(1), Some(SmartRoutingType::Latency));
    }

    #[test]
    fn from_code_unknown_is_none() {
        assert_eq!(RecordType::from_code(99), None);
        assert_eq!(CertificateKeyType::from_code(-1), None);
    }

    #[test]
    fn from_name_case_insensitive() {
        assert_eq!(RecordType::from_name("cname"), Some(RecordType::Cname));
        assert_eq!(RecordType::from_name("CNAME"), Some(RecordType::Cname));
        assert_eq!(MonitorStatus::from_name("online"), Some(MonitorStatus::Online));
        assert_eq!(
            LogAnonymizationType::from_name("onedigit"),
            Some(LogAnonymizationType::OneDigit)
        );
    }

    #[test]
    fn from_name_unknown_is_none() {
        assert_eq!(RecordType::from_name("LOC"), None);
        assert_eq!(MonitorType::from_name(""), None);
    }

    #[test]
    fn code_and_name_lookups_agree() {
        // Parsing the integer code and parsing the display name must yield
        // the same variant for every entry in every table.
        for code in 0..=12 {
            let by_code = RecordType::from_code(code);
            assert!(by_code.is_some(), "missing RecordType code {code}");
            let Some(v) = by_code else {
                return;
            };
            assert_eq!(RecordType::from_name(v.as_str()), Some(v));
            assert_eq!(v.code(), code);
        }
    }

    #[test]
    fn serializes_as_integer_code() {
        let res = serde_json::to_value(RecordType::Mx);
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(v) = res else {
            return;
        };
        assert_eq!(v, json!(4));
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(RecordType::Aaaa.to_string(), "AAAA");
        assert_eq!(AccelerationStatus::Pending.to_string(), "Pending");
    }

    #[test]
    fn defaults_are_code_zero() {
        assert_eq!(MonitorStatus::default().code(), 0);
        assert_eq!(MonitorType::default().code(), 0);
        assert_eq!(SmartRoutingType::default().code(), 0);
        assert_eq!(AccelerationStatus::default().code(), 0);
    }

    #[test]
    fn lenient_accepts_code() {
        let p = probe(json!({ "record_type": 2, "monitor_status": 1 }));
        assert_eq!(p.record_type, Some(RecordType::Cname));
        assert_eq!(p.monitor_status, MonitorStatus::Online);
    }

    #[test]
    fn lenient_accepts_name() {
        let p = probe(json!({ "record_type": "txt", "monitor_status": "Offline" }));
        assert_eq!(p.record_type, Some(RecordType::Txt));
        assert_eq!(p.monitor_status, MonitorStatus::Offline);
    }

    #[test]
    fn lenient_null_and_absent() {
        let p = probe(json!({ "record_type": null }));
        assert_eq!(p.record_type, None);
        assert_eq!(p.monitor_status, MonitorStatus::Unknown);
    }

    #[test]
    fn lenient_unrecognized_degrades() {
        let p = probe(json!({ "record_type": 99, "monitor_status": "Sideways" }));
        assert_eq!(p.record_type, None);
        assert_eq!(p.monitor_status, MonitorStatus::Unknown);
    }

    #[test]
    fn lenient_wrong_json_type_degrades() {
        let p = probe(json!({ "record_type": [1, 2], "monitor_status": true }));
        assert_eq!(p.record_type, None);
        assert_eq!(p.monitor_status, MonitorStatus::Unknown);
    }
}
