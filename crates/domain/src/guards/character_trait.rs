//! Shape guard for serialized traits.

use serde_json::Value;

use super::{field, is_non_blank_string, is_number, is_string, optional, required};

/// Returns `true` when `value` has the shape of a serialized
/// [`CharacterTrait`](crate::entities::CharacterTrait).
pub fn is_trait(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }

    if !required(value, "id", is_non_blank_string)
        || !required(value, "name", is_non_blank_string)
        || !required(value, "points", is_number)
    {
        return false;
    }

    if let Some(tags) = field(value, "tags") {
        let Some(tags) = tags.as_array() else {
            return false;
        };
        if !tags.iter().all(Value::is_string) {
            return false;
        }
    }

    if let Some(replacements) = field(value, "replacements") {
        if !replacements.is_object() {
            return false;
        }
    }

    optional(value, "basePoints", is_number)
        && optional(value, "description", is_string)
        && optional(value, "reference", is_string)
        && optional(value, "localNotes", is_string)
        && optional(value, "canLevel", Value::is_boolean)
        && optional(value, "pointsPerLevel", is_number)
        && optional(value, "levels", is_number)
}
