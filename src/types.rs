use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{
    AccelerationStatus, CertificateKeyType, LogAnonymizationType, MonitorStatus, MonitorType,
    RecordType, SmartRoutingType,
};
use crate::error::Result;
use crate::utils::wire::{null_to_empty_vec, object_if_non_empty};

// ============ Zones ============

/// A DNS zone as returned by the API.
///
/// Parsing is tolerant by construction: every scalar falls back to its
/// zero-value when the key is absent, optional strings fall back to `None`,
/// and [`records`](Self::records) decodes `null` as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZone {
    /// Zone identifier.
    #[serde(default)]
    pub id: i64,
    /// Zone apex domain (e.g. `"example.com"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Whether the bunny.net nameservers were detected at the registrar.
    #[serde(default)]
    pub nameservers_detected: bool,
    /// Whether custom (vanity) nameservers are enabled.
    #[serde(default)]
    pub custom_nameservers_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameserver1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameserver2: Option<String>,
    /// Email address published in the zone's SOA record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa_email: Option<String>,
    /// Whether query logging is enabled for this zone.
    #[serde(default)]
    pub logging_enabled: bool,
    /// Whether client IPs are anonymized in query logs.
    #[serde(default, rename = "LoggingIPAnonymizationEnabled")]
    pub logging_ip_anonymization_enabled: bool,
    /// How log anonymization is performed, when configured.
    #[serde(
        default,
        with = "crate::enums::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_anonymization_type: Option<LogAnonymizationType>,
    /// Whether DNSSEC is enabled for this zone.
    #[serde(default)]
    pub dns_sec_enabled: bool,
    /// Key type for certificates issued on this zone, when configured.
    #[serde(
        default,
        with = "crate::enums::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_key_type: Option<CertificateKeyType>,
    /// When the zone was last modified.
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_modified: Option<DateTime<Utc>>,
    /// When the zone was created.
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,
    /// When the nameserver configuration is next re-checked.
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub nameservers_next_check: Option<DateTime<Utc>>,
    /// Records in this zone. Empty when the payload omits or nulls the key.
    #[serde(default, deserialize_with = "null_to_empty_vec")]
    pub records: Vec<DnsRecord>,
}

impl DnsZone {
    /// Parse a zone from a decoded API payload.
    ///
    /// Never fails on missing optional keys; fails on malformed timestamps
    /// or a payload that is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// One page of a zone listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZoneList {
    /// Current page number (1-indexed).
    #[serde(default)]
    pub current_page: i64,
    /// Total number of zones across all pages.
    #[serde(default)]
    pub total_items: i64,
    /// Whether there are more pages after this one.
    #[serde(default)]
    pub has_more_items: bool,
    /// Zones in the current page. Empty when the payload nulls the key.
    #[serde(default, deserialize_with = "null_to_empty_vec")]
    pub items: Vec<DnsZone>,
}

impl DnsZoneList {
    /// Parse a zone listing page from a decoded API payload.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Per-record outcome counts of a zone file import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZoneImportResult {
    #[serde(default)]
    pub records_successful: i64,
    #[serde(default)]
    pub records_failed: i64,
    #[serde(default)]
    pub records_skipped: i64,
}

impl DnsZoneImportResult {
    /// Parse an import result from a decoded API payload.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// DNSSEC delegation signer material for a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsSecDsRecord {
    /// Whether DNSSEC is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Full DS record string to publish at the registrar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_record: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Digest algorithm name (e.g. `"SHA-256"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_type: Option<String>,
    /// DNSSEC algorithm number.
    #[serde(default)]
    pub algorithm: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default)]
    pub key_tag: i64,
    /// DNSKEY flags field (257 marks a key-signing key).
    #[serde(default)]
    pub flags: i64,
    /// Whether the DS record was found configured at the registrar.
    #[serde(default)]
    pub ds_configured: bool,
}

impl DnsSecDsRecord {
    /// Parse DNSSEC DS material from a decoded API payload.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

// ============ Records ============

/// A DNS record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsRecord {
    /// Record identifier.
    #[serde(default)]
    pub id: i64,
    /// Record type. `None` when the payload omits the type or carries an
    /// unrecognized code.
    #[serde(
        default,
        rename = "Type",
        with = "crate::enums::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_type: Option<RecordType>,
    /// Time to live in seconds.
    #[serde(default)]
    pub ttl: i64,
    /// Record value (address, target hostname, text, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Record name relative to the zone apex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SRV weight.
    #[serde(default)]
    pub weight: i64,
    /// MX/SRV priority.
    #[serde(default)]
    pub priority: i64,
    /// SRV port.
    #[serde(default)]
    pub port: i64,
    /// CAA flags.
    #[serde(default)]
    pub flags: i64,
    /// CAA property tag (`"issue"`, `"issuewild"`, `"iodef"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Whether CDN acceleration is enabled for this record.
    #[serde(default)]
    pub accelerated: bool,
    /// Pull zone backing the acceleration, when enabled.
    #[serde(default)]
    pub accelerated_pull_zone_id: i64,
    /// Name of the linked resource, when the record points at one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
    /// Whether certificates are issued automatically for this record.
    #[serde(default)]
    pub auto_ssl_issuance: bool,
    /// Health state reported by monitoring. `Unknown` when not monitored.
    #[serde(default, with = "crate::enums::lenient_or_default")]
    pub monitor_status: MonitorStatus,
    /// Monitoring mode. `None` when monitoring is off.
    #[serde(default, with = "crate::enums::lenient_or_default")]
    pub monitor_type: MonitorType,
    /// Smart-routing strategy. `None` when not smart-routed.
    #[serde(default, with = "crate::enums::lenient_or_default")]
    pub smart_routing_type: SmartRoutingType,
    /// Acceleration setup progress. `None` when not accelerated.
    #[serde(default, with = "crate::enums::lenient_or_default")]
    pub acceleration_status: AccelerationStatus,
    /// Latitude used for geolocation routing.
    #[serde(default)]
    pub geolocation_latitude: f64,
    /// Longitude used for geolocation routing.
    #[serde(default)]
    pub geolocation_longitude: f64,
    /// Resolved IP geolocation data, when the API provides any.
    #[serde(
        default,
        rename = "IPGeoLocationInfo",
        deserialize_with = "object_if_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_geo_location_info: Option<IPGeoLocationInfo>,
    /// Routing geolocation data, when the API provides any.
    #[serde(
        default,
        deserialize_with = "object_if_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub geolocation_info: Option<GeolocationInfo>,
    /// Script environment variables. Empty when absent or null.
    ///
    /// The wire key is misspelled upstream and must stay that way.
    #[serde(
        default,
        rename = "EnviromentalVariables",
        deserialize_with = "null_to_empty_vec"
    )]
    pub environmental_variables: Vec<EnvironmentalVariable>,
    /// Latency zone for latency-based smart routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_zone: Option<String>,
    /// Whether the record is disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Free-form comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DnsRecord {
    /// Parse a record from a decoded API payload.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

// ============ Nested record objects ============

/// Geolocation data resolved from a record's IP value.
///
/// Present on a parsed [`DnsRecord`] only when the source mapping had at
/// least one key; an empty or null mapping yields no object at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IPGeoLocationInfo {
    /// Autonomous system number of the address.
    #[serde(default, rename = "ASN", skip_serializing_if = "Option::is_none")]
    pub asn: Option<i64>,
    /// ISO country code (e.g. `"US"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Organization the address is registered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Geographic position attached to a record for routing.
///
/// Same construct-only-if-non-empty rule as [`IPGeoLocationInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeolocationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Name/value pair passed to an edge script record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentalVariable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl EnvironmentalVariable {
    /// Build a variable from a name/value pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
