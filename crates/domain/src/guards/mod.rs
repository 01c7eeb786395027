//! Structural guards - cheap shape predicates for values of uncertain
//! provenance.
//!
//! These narrow a raw [`serde_json::Value`] (typically something that crossed
//! a serialization boundary) to "looks like one of our serialized domain
//! objects" without re-running semantic validation. They check presence,
//! scalar types, and non-negativity only; extra properties never invalidate.
//! Each guard is an independent pure function.

mod character;
mod character_trait;
mod equipment;
mod skill;
mod spell;

pub use character::{is_attribute_set, is_character, is_character_basic, is_character_profile};
pub use character_trait::is_trait;
pub use equipment::{is_equipment, is_weapon};
pub use skill::is_skill;
pub use spell::is_spell;

use serde_json::Value;

/// Fetches a field, treating explicit `null` the same as absent.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

fn is_non_blank_string(value: &Value) -> bool {
    matches!(value.as_str(), Some(s) if !s.trim().is_empty())
}

fn is_string(value: &Value) -> bool {
    value.is_string()
}

fn is_number(value: &Value) -> bool {
    value.as_f64().is_some()
}

fn is_number_at_least(value: &Value, min: f64) -> bool {
    matches!(value.as_f64(), Some(n) if n >= min)
}

fn is_positive_number(value: &Value) -> bool {
    matches!(value.as_f64(), Some(n) if n > 0.0)
}

/// Checks an optional field against a predicate; absent (or null) passes.
fn optional(value: &Value, key: &str, check: impl Fn(&Value) -> bool) -> bool {
    field(value, key).is_none_or(|v| check(v))
}

/// Checks a required field against a predicate; absent fails.
fn required(value: &Value, key: &str, check: impl Fn(&Value) -> bool) -> bool {
    field(value, key).is_some_and(|v| check(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_field_counts_as_absent() {
        let value = json!({ "notes": null });
        assert!(field(&value, "notes").is_none());
        assert!(optional(&value, "notes", is_string));
    }

    #[test]
    fn test_required_rejects_absent_and_null() {
        let value = json!({ "id": null });
        assert!(!required(&value, "id", is_non_blank_string));
        assert!(!required(&json!({}), "id", is_non_blank_string));
    }

    #[test]
    fn test_blank_string_predicate() {
        assert!(is_non_blank_string(&json!("sword")));
        assert!(!is_non_blank_string(&json!("   ")));
        assert!(!is_non_blank_string(&json!(42)));
    }
}
