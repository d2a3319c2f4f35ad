//! Unified error type for model parsing and serialization.

use thiserror::Error;

/// Errors produced while decoding API payloads or encoding request bodies.
///
/// Only two failure modes exist in this layer. Everything else the API can
/// throw at the parser (missing keys, null collections, unknown enum codes)
/// is absorbed into defaults and never surfaces as an error.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The CAA `flags` field of a [`DnsRecordInput`](crate::DnsRecordInput)
    /// is outside the wire format's valid range.
    ///
    /// Raised by [`DnsRecordInput::to_wire`](crate::DnsRecordInput::to_wire)
    /// before any serialization happens, so an invalid request body is never
    /// produced.
    #[error("flags must be between 0 and 255, got {0}")]
    FlagsOutOfRange(i64),

    /// A payload could not be decoded into the expected shape, or a request
    /// body could not be encoded.
    ///
    /// Malformed timestamp strings end up here: a timestamp the API sends is
    /// expected to be well-formed, so a parse failure indicates an upstream
    /// contract change and is propagated instead of being swallowed.
    #[error("invalid API payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, ModelError>`.
pub type Result<T> = std::result::Result<T, ModelError>;
