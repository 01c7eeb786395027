//! Shape guard for serialized spells.

use serde_json::Value;

use super::{is_non_blank_string, is_number, required};

/// Returns `true` when `value` has the shape of a serialized
/// [`Spell`](crate::entities::Spell).
pub fn is_spell(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }
    required(value, "id", is_non_blank_string)
        && required(value, "name", is_non_blank_string)
        && required(value, "level", is_number)
        && required(value, "college", is_non_blank_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Spell, SpellInput};
    use serde_json::json;

    #[test]
    fn test_round_trip_passes() {
        let spell = Spell::new(SpellInput {
            id: "sp1".to_string(),
            name: "Haste".to_string(),
            level: Some(14),
            college: "Movement".to_string(),
        })
        .expect("valid spell");
        let value = serde_json::to_value(&spell).expect("serializable");
        assert!(is_spell(&value));
    }

    #[test]
    fn test_missing_college_fails() {
        let value = json!({ "id": "sp1", "name": "Haste", "level": 14 });
        assert!(!is_spell(&value));
    }
}
