//! Shape guards for serialized equipment and weapons.

use serde_json::Value;

use super::{
    is_non_blank_string, is_number_at_least, is_string, optional, required,
};

/// Returns `true` when `value` has the shape of a serialized
/// [`Equipment`](crate::entities::Equipment) node.
///
/// Recurses into `children` (every child must pass), but deliberately never
/// into `weapons` - weapon shape is [`is_weapon`]'s concern.
pub fn is_equipment(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }

    if !required(value, "id", is_non_blank_string) {
        return false;
    }
    if !required(value, "name", is_non_blank_string) {
        return false;
    }

    if !optional(value, "quantity", |v| is_number_at_least(v, 1.0)) {
        return false;
    }
    if !optional(value, "weight", |v| is_number_at_least(v, 0.0)) {
        return false;
    }
    if !optional(value, "cost", |v| is_number_at_least(v, 0.0)) {
        return false;
    }
    if !optional(value, "techLevel", |v| is_number_at_least(v, 0.0)) {
        return false;
    }

    if let Some(children) = super::field(value, "children") {
        let Some(children) = children.as_array() else {
            return false;
        };
        if !children.iter().all(is_equipment) {
            return false;
        }
    }

    for key in ["description", "legalityClass", "notes", "category"] {
        if !optional(value, key, is_string) {
            return false;
        }
    }

    true
}

/// Returns `true` when `value` has the shape of a serialized
/// [`Weapon`](crate::entities::Weapon).
pub fn is_weapon(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }

    if !required(value, "id", is_non_blank_string) {
        return false;
    }

    let Some(damage) = super::field(value, "damage") else {
        return false;
    };
    if !damage.is_object() || !required(damage, "type", is_non_blank_string) {
        return false;
    }

    if let Some(defaults) = super::field(value, "defaults") {
        if !defaults.is_array() {
            return false;
        }
    }

    for key in [
        "strength",
        "accuracy",
        "range",
        "rateOfFire",
        "shots",
        "bulk",
        "recoil",
        "usage",
        "reach",
        "parry",
    ] {
        if !optional(value, key, is_string) {
            return false;
        }
    }

    true
}
