//! Shape guard for serialized skills.

use serde_json::Value;

use super::{is_non_blank_string, is_number, is_string, optional, required};

/// Returns `true` when `value` has the shape of a serialized
/// [`Skill`](crate::entities::Skill).
pub fn is_skill(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }
    required(value, "id", is_non_blank_string)
        && required(value, "name", is_non_blank_string)
        && required(value, "level", is_number)
        && required(value, "difficulty", is_non_blank_string)
        && optional(value, "specialization", is_string)
        && optional(value, "techLevel", is_string)
        && optional(value, "points", is_number)
}
