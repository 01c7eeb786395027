//! Shape guards for the serialized character aggregate and its blocks.

use serde_json::Value;

use super::{
    field, is_non_blank_string, is_number, is_number_at_least, is_positive_number, is_string,
    optional, required,
};

/// Returns `true` when `value` has the shape of a serialized
/// [`Character`](crate::entities::Character): all three blocks present and
/// individually well-shaped.
pub fn is_character(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }
    let (Some(basic), Some(profile), Some(attributes)) = (
        field(value, "basic"),
        field(value, "profile"),
        field(value, "attributes"),
    ) else {
        return false;
    };
    is_character_basic(basic) && is_character_profile(profile) && is_attribute_set(attributes)
}

/// Shape check for a serialized [`CharacterBasic`](crate::value_objects::CharacterBasic).
pub fn is_character_basic(value: &Value) -> bool {
    value.is_object()
        && required(value, "version", |v| is_number_at_least(v, 0.0))
        && required(value, "id", is_non_blank_string)
        && required(value, "totalPoints", |v| is_number_at_least(v, 0.0))
        && required(value, "createdDate", is_non_blank_string)
        && required(value, "modifiedDate", is_non_blank_string)
}

/// Shape check for a serialized [`CharacterProfile`](crate::value_objects::CharacterProfile).
pub fn is_character_profile(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }
    if !required(value, "name", is_non_blank_string)
        || !required(value, "playerName", is_non_blank_string)
    {
        return false;
    }
    for key in ["age", "height", "weight", "techLevel"] {
        if !optional(value, key, |v| is_number_at_least(v, 0.0)) {
            return false;
        }
    }
    for key in [
        "birthday",
        "eyes",
        "hair",
        "skin",
        "handedness",
        "gender",
        "portrait",
    ] {
        if !optional(value, key, is_string) {
            return false;
        }
    }
    true
}

/// Shape check for a serialized [`AttributeSet`](crate::value_objects::AttributeSet).
pub fn is_attribute_set(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }
    for key in ["st", "dx", "iq", "ht", "will", "per"] {
        if !required(value, key, |v| is_number_at_least(v, 1.0)) {
            return false;
        }
    }
    required(value, "basicSpeed", is_positive_number)
        && required(value, "basicMove", |v| is_number_at_least(v, 0.0))
        && required(value, "hitPoints", is_number)
        && required(value, "fatiguePoints", |v| is_number_at_least(v, 1.0))
        && optional(value, "magicPoints", |v| is_number_at_least(v, 0.0))
}
