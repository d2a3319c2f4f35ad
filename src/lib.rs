//! # bunny-dns
//!
//! Typed data models and wire serialization for the
//! [bunny.net DNS API](https://docs.bunny.net/reference/dnszonepublic_index).
//!
//! This crate is the data-modeling layer of a DNS management client: it
//! converts the API's PascalCase JSON payloads into strongly-typed zones,
//! records, DNSSEC material and geolocation metadata, and turns sparse record
//! inputs back into the exact wire shape the API expects. It contains no HTTP
//! transport, no authentication, and no pagination loop — every operation is
//! a pure, synchronous transformation, safe to call from any thread.
//!
//! ## Parsing
//!
//! Parsing is tolerant by design. The API commonly omits optional keys,
//! sends `null` where a list is expected, and returns enum values either as
//! integer codes or as display strings depending on the endpoint. All of
//! that is absorbed:
//!
//! - absent scalars fall back to their zero-value, absent strings to `None`;
//! - collections decode absent/`null` as empty, never `None`;
//! - enum fields accept the integer code or the case-insensitive name, and
//!   unrecognized values degrade to absence instead of failing the parse;
//! - nested objects (geolocation, environment variables) are constructed
//!   only when the source mapping has at least one key.
//!
//! The one thing that *does* fail a parse is a malformed timestamp: that
//! indicates an API contract change and is surfaced as an error.
//!
//! ```rust
//! use bunny_dns::{DnsZone, RecordType};
//! use serde_json::json;
//!
//! let zone = DnsZone::from_value(json!({
//!     "Id": 12345,
//!     "Domain": "example.com",
//!     "DateCreated": "2024-01-15T10:30:00Z",
//!     "Records": [
//!         { "Id": 101, "Type": 0, "Ttl": 300, "Value": "1.2.3.4", "Name": "www" },
//!         { "Id": 102, "Type": "CNAME", "Ttl": 300, "Value": "example.com", "Name": "alias" },
//!     ],
//! }))?;
//!
//! assert_eq!(zone.domain.as_deref(), Some("example.com"));
//! assert_eq!(zone.records[0].record_type, Some(RecordType::A));
//! assert_eq!(zone.records[1].record_type, Some(RecordType::Cname));
//! # Ok::<(), bunny_dns::ModelError>(())
//! ```
//!
//! ## Building requests
//!
//! [`DnsRecordInput`] serializes only the fields that were explicitly
//! assigned, which is what gives the API's partial updates their semantics.
//! [`Field`] distinguishes "never assigned" from explicit `false`/`0`/`""`
//! and from an explicit `null`:
//!
//! ```rust
//! use bunny_dns::{DnsRecordInput, Field, RecordType};
//!
//! let mut input = DnsRecordInput::new();
//! input.record_type = Field::Set(RecordType::Mx);
//! input.value = Field::Set("mail.example.com".to_string());
//! input.priority = Field::Set(10);
//! input.comment = Field::Null; // clear the comment on the server
//!
//! let body = input.to_wire()?;
//! assert_eq!(body["Type"], 4); // enums go out as integer codes
//! assert!(body["Comment"].is_null());
//! assert!(!body.contains_key("Ttl")); // never assigned, never sent
//! # Ok::<(), bunny_dns::ModelError>(())
//! ```
//!
//! ## Error handling
//!
//! All fallible operations return [`Result<T, ModelError>`](ModelError).
//! Only two failure modes exist:
//!
//! - [`ModelError::Json`] — a payload could not be decoded (including
//!   malformed timestamps);
//! - [`ModelError::FlagsOutOfRange`] — a record input's CAA `flags` is
//!   outside `0..=255`, caught before the request body is built.
//!
//! Everything else the API can do (missing keys, null collections, unknown
//! enum codes) parses cleanly into defaults.

mod enums;
mod error;
mod input;
mod types;
mod utils;

// Re-export error types
pub use error::{ModelError, Result};

// Re-export enum tables and the dual code/name lookup trait
pub use enums::{
    AccelerationStatus, CertificateKeyType, LogAnonymizationType, MonitorStatus, MonitorType,
    RecordType, SmartRoutingType, WireEnum,
};

// Re-export parsed entities
pub use types::{
    DnsRecord, DnsSecDsRecord, DnsZone, DnsZoneImportResult, DnsZoneList, EnvironmentalVariable,
    GeolocationInfo, IPGeoLocationInfo,
};

// Re-export the input builder
pub use input::{DnsRecordInput, Field};

// Re-export datetime helpers for reuse in caller-defined payload types
pub use utils::datetime;
