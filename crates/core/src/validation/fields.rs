//! Single-field validators over untyped JSON values.
//!
//! Every check comes in two flavours: a `parse_*` function returning the
//! typed value or the first failing rule, and a `validate_*` wrapper
//! returning the (possibly empty) error list. `None` means the field was
//! not present in the body at all, which is distinct from an explicit
//! `null`.

use serde_json::Value;

use super::FieldError;
use crate::resolution::Resolution;
use crate::timestamp;
use crate::types::Timestamp;

pub const RESOLUTIONS_FIELD: &str = "availableResolutions";
pub const AGE_RESTRICTION_FIELD: &str = "minAgeRestriction";

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 18;

fn required(field: &str) -> FieldError {
    FieldError::new(field, format!("{field} is required"))
}

fn into_errors<T>(result: Result<T, FieldError>) -> Vec<FieldError> {
    result.err().into_iter().collect()
}

/// Whitespace stripped from both ends of a string field: Unicode white space
/// plus the byte-order mark, but not NEL (U+0085).
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// A non-empty string, trimmed, optionally capped at `max` UTF-16 code units.
pub fn parse_required_string(
    field: &str,
    value: Option<&Value>,
    max: Option<usize>,
) -> Result<String, FieldError> {
    let raw = match value {
        None | Some(Value::Null) => return Err(required(field)),
        Some(Value::String(s)) => s,
        Some(_) => return Err(FieldError::new(field, format!("{field} must be a string"))),
    };

    let trimmed = raw.trim_matches(is_trimmed);
    let len = trimmed.encode_utf16().count();
    if len == 0 {
        return Err(FieldError::new(field, format!("{field} cannot be empty")));
    }
    if let Some(max) = max.filter(|&max| len > max) {
        return Err(FieldError::new(field, format!("{field} max length is {max}")));
    }
    Ok(trimmed.to_string())
}

pub fn validate_required_string(
    field: &str,
    value: Option<&Value>,
    max: Option<usize>,
) -> Vec<FieldError> {
    into_errors(parse_required_string(field, value, max))
}

/// A non-empty array of resolution labels.
///
/// Order and duplicates are kept. Unknown labels are reported together in a
/// single error.
pub fn parse_resolutions(value: Option<&Value>) -> Result<Vec<Resolution>, FieldError> {
    let field = RESOLUTIONS_FIELD;
    let items = match value {
        None | Some(Value::Null) => return Err(required(field)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(FieldError::new(field, format!("{field} must be an array"))),
    };
    if items.is_empty() {
        return Err(FieldError::new(field, "At least one resolution should be added"));
    }

    let mut parsed = Vec::with_capacity(items.len());
    let mut invalid = Vec::new();
    for item in items {
        match item.as_str().and_then(Resolution::from_label) {
            Some(resolution) => parsed.push(resolution),
            None => invalid.push(display_value(item)),
        }
    }

    if invalid.is_empty() {
        Ok(parsed)
    } else {
        Err(FieldError::new(
            field,
            format!("{field} contains invalid value(s): {}", invalid.join(", ")),
        ))
    }
}

pub fn validate_resolutions(value: Option<&Value>) -> Vec<FieldError> {
    into_errors(parse_resolutions(value))
}

/// Strings are shown bare, anything else as its JSON text, so `null` and
/// objects stay recognisable (`null`, `{"a":1}`) instead of collapsing to an
/// empty string or a placeholder.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn parse_boolean(field: &str, value: Option<&Value>) -> Result<bool, FieldError> {
    match value {
        None | Some(Value::Null) => Err(required(field)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(FieldError::new(field, format!("{field} must be a boolean"))),
    }
}

pub fn validate_boolean(field: &str, value: Option<&Value>) -> Vec<FieldError> {
    into_errors(parse_boolean(field, value))
}

/// `null` (no restriction) or an integer in `MIN_AGE..=MAX_AGE`.
///
/// Integral floats such as `16.0` count as integers.
pub fn parse_age_restriction(value: Option<&Value>) -> Result<Option<u8>, FieldError> {
    let field = AGE_RESTRICTION_FIELD;
    let value = match value {
        Some(Value::Null) => return Ok(None),
        None => return Err(required(field)),
        Some(v) => v,
    };

    let Some(age) = as_integer(value) else {
        return Err(FieldError::new(
            field,
            format!("{field} must be an integer or null"),
        ));
    };
    match u8::try_from(age) {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(Some(age)),
        _ => Err(FieldError::new(
            field,
            format!("{field} must be between {MIN_AGE} and {MAX_AGE}"),
        )),
    }
}

pub fn validate_age_restriction(value: Option<&Value>) -> Vec<FieldError> {
    into_errors(parse_age_restriction(value))
}

/// Integer value of a JSON number, if it has no fractional part.
///
/// Magnitudes beyond `i64` saturate, which keeps them out of any sane range.
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// A canonical ISO-8601 date-time string (see [`timestamp::parse_canonical`]).
pub fn parse_iso_date_time(
    field: &str,
    value: Option<&Value>,
) -> Result<Timestamp, FieldError> {
    let raw = match value {
        None | Some(Value::Null) => return Err(required(field)),
        Some(Value::String(s)) => s,
        Some(_) => return Err(FieldError::new(field, format!("{field} must be a string"))),
    };
    timestamp::parse_canonical(raw).ok_or_else(|| {
        FieldError::new(field, format!("{field} must be a valid ISO date-time"))
    })
}

pub fn validate_iso_date_time(field: &str, value: Option<&Value>) -> Vec<FieldError> {
    into_errors(parse_iso_date_time(field, value))
}
