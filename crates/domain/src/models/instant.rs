//! Wire format for UTC instants.
//!
//! Instants are written as ISO-8601 with millisecond precision and a `Z`
//! suffix (`2024-05-01T09:00:00.000Z`). On read, RFC 3339 with any offset is
//! accepted, and so is a naive timestamp, which is taken to be UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats an instant the way the wire expects it.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an instant from the wire.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_instant(instant))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid instant: {}", raw)))
}

/// Same format for optional fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(instant: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(dt) => serializer.serialize_some(&format_instant(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_instant(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid instant: {}", raw))),
            None => Ok(None),
        }
    }
}
