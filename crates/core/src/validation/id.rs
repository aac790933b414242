//! Validation of the `{id}` path segment.
//!
//! Rules run in order and stop at the first failure: presence, ASCII digits
//! only, exact representability as a double-precision integer, then the
//! 32-bit signed positive range.

use std::sync::LazyLock;

use regex::Regex;

use super::FieldError;
use crate::types::DbId;

pub const ID_FIELD: &str = "id";

pub const ID_MIN: DbId = 1;
pub const ID_MAX: DbId = 2_147_483_647;

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

fn id_error(message: impl Into<String>) -> FieldError {
    FieldError::new(ID_FIELD, message)
}

/// Parse a raw path segment into a video id.
pub fn parse_id(raw: Option<&str>) -> Result<DbId, FieldError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(id_error("id is required")),
    };
    if !DIGITS_RE.is_match(raw) {
        return Err(id_error("id must be an integer number"));
    }

    let digits = raw.trim_start_matches('0');
    let value = if digits.is_empty() {
        Some(0)
    } else {
        digits.parse::<u64>().ok().filter(|&v| v <= MAX_SAFE_INTEGER)
    };
    let Some(value) = value else {
        return Err(id_error("id is not a safe integer"));
    };

    match DbId::try_from(value) {
        Ok(id) if (ID_MIN..=ID_MAX).contains(&id) => Ok(id),
        _ => Err(id_error(format!("id must be between {ID_MIN} and {ID_MAX}"))),
    }
}

/// Error-list form of [`parse_id`]; empty iff the id is acceptable.
pub fn id_errors(raw: Option<&str>) -> Vec<FieldError> {
    parse_id(raw).err().into_iter().collect()
}
