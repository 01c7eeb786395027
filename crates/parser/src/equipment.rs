//! Node assembler - recursive, error-accumulating equipment/weapon build.
//!
//! Unlike every other assembler in the pipeline this one never fails fast:
//! all violations found anywhere in a subtree are collected into one flat
//! message list before the call returns. A single malformed weapon or child
//! does not stop its siblings from being checked, so one pass over a large
//! inventory reports every broken item. When any error is present the whole
//! subtree is rejected; no partial node is ever returned.
//!
//! Message order per node: own-field errors, then `weapons[i]:`-tagged
//! weapon errors in array order, then `in child:`-prefixed errors merged
//! from each child subtree.

use serde_json::Value;
use sheetforge_domain::{
    DamageType, DomainError, Equipment, EquipmentCalc, EquipmentInput, Weapon, WeaponCalc,
    WeaponDamage, WeaponDefault, WeaponInput,
};

use crate::extract::{field, type_name};
use crate::report::ParseReport;

/// Assembles one equipment node and its whole subtree.
pub fn parse_equipment(raw: &Value) -> ParseReport<Equipment> {
    if !raw.is_object() {
        return ParseReport::fail(vec![format!(
            "equipment record must be an object, got {}",
            type_name(raw)
        )]);
    }

    let mut errors = Vec::new();

    let id = non_blank(raw, "id");
    if id.is_none() {
        errors.push("missing required field: id".to_string());
    }
    let name = non_blank(raw, "description");
    if name.is_none() {
        errors.push("missing required field: description".to_string());
    }

    let quantity = match field(raw, "quantity") {
        None => None,
        Some(v) => match v.as_u64().and_then(|q| u32::try_from(q).ok()) {
            Some(q) if q >= 1 => Some(q),
            _ => {
                errors.push(format!("field quantity must be a positive integer, got {v}"));
                None
            }
        },
    };

    // Own-field problems do not stop the subtree scan; weapons and children
    // still get checked so every error surfaces in one pass.
    let mut weapons = Vec::new();
    if let Some(Value::Array(raw_weapons)) = field(raw, "weapons") {
        for (i, raw_weapon) in raw_weapons.iter().enumerate() {
            match parse_weapon(raw_weapon) {
                Ok(weapon) => weapons.push(weapon),
                Err(err) => {
                    errors.extend(err.messages().into_iter().map(|m| format!("weapons[{i}]: {m}")));
                }
            }
        }
    }

    let mut children = Vec::new();
    if let Some(Value::Array(raw_children)) = field(raw, "children") {
        for raw_child in raw_children {
            let child = parse_equipment(raw_child);
            match child.into_result() {
                Ok(child) => children.push(child),
                Err(err) => {
                    errors.extend(err.messages().into_iter().map(|m| format!("in child: {m}")));
                }
            }
        }
    }

    if !errors.is_empty() {
        return ParseReport::fail(errors);
    }

    let calc = field(raw, "calc").map(|c| EquipmentCalc {
        extended_value: field(c, "extended_value").and_then(Value::as_f64),
        extended_weight: field(c, "extended_weight")
            .and_then(Value::as_str)
            .map(str::to_string),
    });

    // Weight prefers the pre-aggregated calc snapshot string over the unit
    // base weight; cost prefers the calc extended value. Both default to 0.
    let weight = weight_value(
        field(raw, "calc")
            .and_then(|c| field(c, "extended_weight"))
            .or_else(|| field(raw, "base_weight")),
    );
    let cost = field(raw, "calc")
        .and_then(|c| field(c, "extended_value"))
        .or_else(|| field(raw, "base_value"))
        .and_then(Value::as_f64);

    let input = EquipmentInput {
        id: id.unwrap_or_default(),
        name: name.clone().unwrap_or_default(),
        quantity,
        weight,
        cost,
        children,
        weapons,
        calc,
        description: name,
        tech_level: tech_level_value(field(raw, "tech_level")),
        legality_class: string_value(raw, "legality_class"),
        notes: string_value(raw, "local_notes"),
        category: string_value(raw, "category"),
    };

    match Equipment::new(input) {
        Ok(equipment) => ParseReport::ok(equipment),
        Err(err) => ParseReport::fail(err.messages()),
    }
}

/// Assembles a whole equipment forest, accumulating every node's errors.
pub fn parse_equipment_list(raw: &Value) -> ParseReport<Vec<Equipment>> {
    let Value::Array(records) = raw else {
        return ParseReport::fail(vec![format!(
            "equipment list must be an array, got {}",
            type_name(raw)
        )]);
    };

    let mut errors = Vec::new();
    let mut forest = Vec::new();
    for record in records {
        match parse_equipment(record).into_result() {
            Ok(equipment) => forest.push(equipment),
            Err(err) => errors.extend(err.messages()),
        }
    }

    if errors.is_empty() {
        ParseReport::ok(forest)
    } else {
        ParseReport::fail(errors)
    }
}

/// Builds one weapon. Fail-fast internally; the caller tags the failure
/// with the weapon's array index before accumulating it.
fn parse_weapon(raw: &Value) -> Result<Weapon, DomainError> {
    if !raw.is_object() {
        return Err(DomainError::structural(format!(
            "weapon record must be an object, got {}",
            type_name(raw)
        )));
    }

    let id = non_blank(raw, "id").ok_or_else(|| DomainError::missing_field("id"))?;

    // A missing or unrecognized damage type degrades to Unknown rather than
    // failing; real documents carry open-ended type tokens.
    let damage = match field(raw, "damage") {
        Some(d) => WeaponDamage {
            damage_type: field(d, "type")
                .and_then(Value::as_str)
                .map(|s| s.parse().unwrap_or(DamageType::Unknown))
                .unwrap_or(DamageType::Unknown),
            base: string_value(d, "base"),
            st: string_value(d, "st"),
        },
        None => WeaponDamage {
            damage_type: DamageType::Unknown,
            base: None,
            st: None,
        },
    };

    let mut defaults = Vec::new();
    if let Some(Value::Array(raw_defaults)) = field(raw, "defaults") {
        for (i, raw_default) in raw_defaults.iter().enumerate() {
            defaults.push(parse_weapon_default(raw_default, i)?);
        }
    }

    let calc = field(raw, "calc").map(|c| WeaponCalc {
        level: field(c, "level").and_then(Value::as_f64),
        damage: string_value(c, "damage"),
        parry: string_value(c, "parry"),
        range: string_value(c, "range"),
    });

    Weapon::new(WeaponInput {
        id,
        damage: Some(damage),
        strength: string_value(raw, "strength"),
        accuracy: string_value(raw, "accuracy"),
        range: string_value(raw, "range"),
        rate_of_fire: string_value(raw, "rate_of_fire"),
        shots: string_value(raw, "shots"),
        bulk: string_value(raw, "bulk"),
        recoil: string_value(raw, "recoil"),
        usage: string_value(raw, "usage"),
        reach: string_value(raw, "reach"),
        parry: string_value(raw, "parry"),
        defaults,
        calc,
    })
}

/// A skill default must name its skill; an attribute default's `type` token
/// is the attribute itself.
fn parse_weapon_default(raw: &Value, index: usize) -> Result<WeaponDefault, DomainError> {
    let kind = field(raw, "type")
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::missing_field(format!("defaults[{index}].type")))?;
    let modifier = field(raw, "modifier")
        .and_then(Value::as_i64)
        .unwrap_or(0) as i32;

    if kind == "skill" {
        let name = non_blank(raw, "name")
            .ok_or_else(|| DomainError::missing_field(format!("defaults[{index}].name")))?;
        Ok(WeaponDefault::Skill {
            name,
            specialization: string_value(raw, "specialization"),
            modifier,
        })
    } else {
        Ok(WeaponDefault::Attribute {
            attribute: kind.to_string(),
            modifier,
        })
    }
}

fn non_blank(raw: &Value, key: &str) -> Option<String> {
    field(raw, key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_value(raw: &Value, key: &str) -> Option<String> {
    field(raw, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Reads a weight that may be a bare number or a display string
/// like "7.3 lb"; absent or unmatchable input yields no value.
fn weight_value(value: Option<&Value>) -> Option<f64> {
    match value {
        None => None,
        Some(Value::String(s)) => crate::extract::leading_numeral(s),
        Some(v) => v.as_f64(),
    }
}

/// Tech level arrives as a numeral string in real documents.
fn tech_level_value(value: Option<&Value>) -> Option<u32> {
    match value {
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(v) => v.as_u64().and_then(|n| u32::try_from(n).ok()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sword() -> Value {
        json!({
            "id": "e1",
            "description": "Broadsword",
            "quantity": 1,
            "base_value": 500,
            "base_weight": "3 lb",
            "weapons": [{
                "id": "w1",
                "damage": { "type": "cut", "base": "2d+1", "st": "sw" },
                "usage": "Swung",
                "defaults": [
                    { "type": "skill", "name": "Broadsword" },
                    { "type": "dx", "modifier": -4 }
                ]
            }]
        })
    }

    #[test]
    fn test_parses_valid_node_with_weapon() {
        let report = parse_equipment(&sword());
        let equipment = report.into_result().expect("valid record");
        assert_eq!(equipment.name(), "Broadsword");
        assert_eq!(equipment.weight(), 3.0);
        assert_eq!(equipment.cost(), 500.0);
        assert!(equipment.has_weapons());
        assert_eq!(equipment.weapons()[0].defaults().len(), 2);
    }

    #[test]
    fn test_calc_snapshot_preferred_and_copied_verbatim() {
        let raw = json!({
            "id": "e1",
            "description": "Backpack",
            "base_value": 10,
            "base_weight": "2 lb",
            "calc": { "extended_value": 60.0, "extended_weight": "17.3 lb" }
        });
        let equipment = parse_equipment(&raw).into_result().expect("valid record");
        assert_eq!(equipment.weight(), 17.3);
        assert_eq!(equipment.cost(), 60.0);
        let calc = equipment.calc().expect("calc present");
        assert_eq!(calc.extended_value, Some(60.0));
        assert_eq!(calc.extended_weight.as_deref(), Some("17.3 lb"));
    }

    #[test]
    fn test_error_accumulation_order() {
        // Bad weapon AND bad child: both must be reported, own errors first.
        let raw = json!({
            "description": "Crate",
            "weapons": [{ "damage": { "type": "cr" } }],
            "children": [{ "id": "c1" }]
        });
        let report = parse_equipment(&raw);
        assert!(!report.success());
        let errors = report.errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "missing required field: id");
        assert_eq!(errors[1], "weapons[0]: missing required field: id");
        assert_eq!(errors[2], "in child: missing required field: description");
    }

    #[test]
    fn test_deep_child_errors_surface_at_root() {
        let raw = json!({
            "id": "top",
            "description": "Chest",
            "children": [{
                "id": "mid",
                "description": "Sack",
                "children": [{ "description": "Coin" }]
            }]
        });
        let report = parse_equipment(&raw);
        assert_eq!(
            report.errors(),
            ["in child: in child: missing required field: id"]
        );
    }

    #[test]
    fn test_failed_subtree_returns_no_partial_node() {
        let raw = json!({
            "id": "top",
            "description": "Chest",
            "children": [{ "description": "broken" }]
        });
        let report = parse_equipment(&raw);
        assert!(report.data().is_none());
    }

    #[test]
    fn test_malformed_weapon_does_not_stop_siblings() {
        let raw = json!({
            "id": "e1",
            "description": "Bandolier",
            "weapons": [
                { "damage": { "type": "imp" } },
                { "id": "w2", "damage": { "type": "not-a-type" } }
            ]
        });
        let report = parse_equipment(&raw);
        // First weapon fails, second would parse (unknown type degrades).
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].starts_with("weapons[0]:"));
    }

    #[test]
    fn test_skill_default_requires_name() {
        let raw = json!({
            "id": "e1",
            "description": "Knife",
            "weapons": [{
                "id": "w1",
                "damage": { "type": "imp" },
                "defaults": [{ "type": "skill" }]
            }]
        });
        let report = parse_equipment(&raw);
        assert_eq!(
            report.errors(),
            ["weapons[0]: missing required field: defaults[0].name"]
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let raw = json!({ "id": "e1", "description": "Rope", "quantity": 0 });
        let report = parse_equipment(&raw);
        assert!(report.errors()[0].contains("quantity"));
    }

    #[test]
    fn test_list_accumulates_across_records() {
        let raw = json!([
            { "id": "a", "description": "Lantern" },
            { "description": "nameless" },
            { "id": "c" }
        ]);
        let report = parse_equipment_list(&raw);
        assert_eq!(report.errors().len(), 2);
        assert!(report.errors()[0].contains("id"));
        assert!(report.errors()[1].contains("description"));
    }

    #[test]
    fn test_list_must_be_array() {
        let report = parse_equipment_list(&json!({}));
        assert!(report.errors()[0].contains("must be an array"));
    }
}
