//! Shared (de)serialization helpers.

pub mod datetime;
pub(crate) mod wire;
