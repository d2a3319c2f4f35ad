//! Shared fixtures and assertion helpers.

#![allow(dead_code)]

use serde_json::{Value, json};

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// A typical A record payload with the always-present scalars.
pub fn sample_record() -> Value {
    json!({
        "Id": 101,
        "Type": 0,
        "Ttl": 300,
        "Value": "1.2.3.4",
        "Name": "www",
        "Weight": 0,
        "Priority": 0,
        "Port": 0,
        "Flags": 0,
        "Accelerated": false,
        "AcceleratedPullZoneId": 0,
        "GeolocationLatitude": 0.0,
        "GeolocationLongitude": 0.0,
        "Disabled": false,
        "AutoSslIssuance": false,
        "Comment": "Test record"
    })
}

/// A record payload with every optional field populated.
pub fn sample_record_full() -> Value {
    json!({
        "Id": 202,
        "Type": 9,
        "Ttl": 600,
        "Value": "letsencrypt.org",
        "Name": "caa",
        "Weight": 100,
        "Priority": 10,
        "Port": 8080,
        "Flags": 128,
        "Tag": "issue",
        "Accelerated": true,
        "AcceleratedPullZoneId": 999,
        "LinkName": "my-link",
        "AutoSslIssuance": true,
        "MonitorStatus": 1,
        "MonitorType": 2,
        "SmartRoutingType": 1,
        "AccelerationStatus": 2,
        "GeolocationLatitude": 37.7749,
        "GeolocationLongitude": -122.4194,
        "IPGeoLocationInfo": {
            "ASN": 13335,
            "CountryCode": "US",
            "Country": "United States",
            "OrganizationName": "Cloudflare Inc",
            "City": "San Francisco"
        },
        "GeolocationInfo": {
            "Latitude": 37.7749,
            "Longitude": -122.4194,
            "Country": "United States",
            "City": "San Francisco"
        },
        "EnviromentalVariables": [
            { "Name": "ENV_KEY", "Value": "val1" },
            { "Name": "ENV_KEY2", "Value": "val2" }
        ],
        "LatencyZone": "europe",
        "Disabled": false,
        "Comment": "Full record"
    })
}

/// A typical zone payload embedding [`sample_record`].
pub fn sample_zone() -> Value {
    json!({
        "Id": 12345,
        "Domain": "example.com",
        "NameserversDetected": true,
        "CustomNameserversEnabled": false,
        "Nameserver1": "ns1.bunny.net",
        "Nameserver2": "ns2.bunny.net",
        "SoaEmail": "admin@example.com",
        "LoggingEnabled": true,
        "LoggingIPAnonymizationEnabled": true,
        "LogAnonymizationType": 0,
        "DnsSecEnabled": false,
        "CertificateKeyType": 0,
        "DateModified": "2024-01-15T10:30:00Z",
        "DateCreated": "2024-01-10T08:00:00Z",
        "NameserversNextCheck": "2024-01-16T10:30:00Z",
        "Records": [sample_record()]
    })
}

/// A one-page zone listing embedding [`sample_zone`].
pub fn sample_zone_list() -> Value {
    json!({
        "CurrentPage": 1,
        "TotalItems": 1,
        "HasMoreItems": false,
        "Items": [sample_zone()]
    })
}

pub fn sample_import_result() -> Value {
    json!({
        "RecordsSuccessful": 10,
        "RecordsFailed": 2,
        "RecordsSkipped": 1
    })
}

pub fn sample_dnssec() -> Value {
    json!({
        "Enabled": true,
        "DsRecord": "example.com. 3600 IN DS 12345 13 2 ABCDEF...",
        "Digest": "ABCDEF1234567890",
        "DigestType": "SHA-256",
        "Algorithm": 13,
        "PublicKey": "BASE64PUBLICKEY==",
        "KeyTag": 12345,
        "Flags": 257,
        "DsConfigured": false
    })
}
