//! Canonical ISO-8601 timestamps.
//!
//! The wire form is always `YYYY-MM-DDTHH:MM:SS.sssZ`: UTC, millisecond
//! precision, `Z` suffix. A string is accepted as a timestamp only if it is
//! already in that exact form, so anything that survives parsing also
//! serializes back byte-for-byte.

use chrono::{DateTime, SecondsFormat, SubsecRound, Timelike, Utc};

use crate::types::Timestamp;

/// Current instant, truncated to the millisecond precision of the wire form.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Render a timestamp in canonical form.
pub fn format_iso(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a canonical timestamp.
///
/// Returns `None` if the input is not an RFC 3339 date-time, or if it is one
/// but not in canonical form (offset other than `Z`, missing or extra
/// fractional digits, lowercase separators, ...). A seconds field of `60`
/// is rejected too: chrono reads it as a leap second at any minute.
pub fn parse_canonical(raw: &str) -> Option<Timestamp> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    (format_iso(&parsed) == raw).then_some(parsed)
}

/// Serde adapter for [`Timestamp`] fields using the canonical wire form.
pub mod serde_iso {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_iso, parse_canonical};
    use crate::types::Timestamp;

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_canonical(&raw)
            .ok_or_else(|| de::Error::custom(format!("not a canonical ISO date-time: {raw}")))
    }
}
