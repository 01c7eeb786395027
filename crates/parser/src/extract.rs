//! Field extractor - scalar extraction and coercion over raw JSON values.
//!
//! Every higher-level assembler funnels its scalar reads through these
//! helpers. Each failure carries the dotted field path of the offending
//! value so a composite diagnostic can locate it.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde_json::Value;
use sheetforge_domain::DomainError;

/// Feet-and-inches height notation, e.g. `5'10.5"`.
static HEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)'(\d*\.?\d*)").expect("valid height pattern"));

/// Leading decimal numeral, e.g. the `7.3` of `"7.3 lb"`.
static NUMERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid numeral pattern"));

const LB_TO_KG: f64 = 0.453592;
const FT_TO_M: f64 = 0.3048;
const IN_TO_M: f64 = 0.0254;

/// Fetches a field from an object, treating explicit `null` as absent.
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

/// Describes a JSON value's type for diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extracts a mandatory non-blank string, trimmed.
pub fn require_string(value: Option<&Value>, path: &str) -> Result<String, DomainError> {
    match value {
        None | Some(Value::Null) => Err(DomainError::missing_field(path)),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(DomainError::missing_field(path)),
        Some(other) => Err(DomainError::wrong_type(path, "a non-blank string", type_name(other))),
    }
}

/// Extracts a mandatory finite number.
pub fn require_number(value: Option<&Value>, path: &str) -> Result<f64, DomainError> {
    match value {
        None | Some(Value::Null) => Err(DomainError::missing_field(path)),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| DomainError::wrong_type(path, "a number", type_name(v))),
    }
}

/// Extracts an optional string: absent and `null` yield `None`, as does a
/// blank string. Any non-string value is an error.
pub fn optional_string(value: Option<&Value>, path: &str) -> Result<Option<String>, DomainError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(other) => Err(DomainError::wrong_type(path, "a string", type_name(other))),
    }
}

/// Extracts an optional number, coercing unit-bearing strings.
///
/// Coercion rules, keyed by the field path:
/// - a path containing "height" parses `F'I.I"` notation to meters;
/// - a path containing "weight" parses a leading numeral as pounds and
///   converts to kilograms;
/// - any other string is stripped of non-numeric characters and parsed as-is.
///
/// A string that still yields no number fails with
/// [`DomainError::UnparsableNumber`].
pub fn optional_number(value: Option<&Value>, path: &str) -> Result<Option<f64>, DomainError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => coerce_unit_string(s, path).map(Some),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| DomainError::wrong_type(path, "a number", type_name(v))),
    }
}

/// First decimal numeral found in a display string, e.g. the `7.3` of
/// `"7.3 lb"`.
pub(crate) fn leading_numeral(raw: &str) -> Option<f64> {
    NUMERAL_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn coerce_unit_string(raw: &str, path: &str) -> Result<f64, DomainError> {
    if path.contains("height") {
        if let Some(caps) = HEIGHT_RE.captures(raw) {
            let feet: f64 = caps
                .get(1)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0.0);
            let inches: f64 = caps
                .get(2)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0.0);
            return Ok(feet * FT_TO_M + inches * IN_TO_M);
        }
    }
    if path.contains("weight") {
        if let Some(pounds) = leading_numeral(raw) {
            return Ok(pounds * LB_TO_KG);
        }
    }

    // Strip units and parse whatever digits remain.
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| DomainError::unparsable_number(path, raw))
}
