//! Trait list assembly. Fail-fast, with the cross-field invariants
//! (template replacements, tag conflicts, leveling fields) enforced by the
//! entity constructor.

use std::collections::BTreeMap;

use serde_json::Value;
use sheetforge_domain::{CharacterTrait, CharacterTraitInput, DomainError};

use crate::extract::{field, require_string, type_name};

/// Parses the `traits` array. Non-object entries are skipped; an invalid
/// object entry fails the whole list.
pub fn parse_traits(data: &Value) -> Result<Vec<CharacterTrait>, DomainError> {
    let Value::Array(records) = data else {
        return Err(DomainError::structural(format!(
            "traits must be an array, got {}",
            type_name(data)
        )));
    };

    let mut traits = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_object() {
            continue;
        }
        traits.push(parse_trait(record)?);
    }
    Ok(traits)
}

fn parse_trait(raw: &Value) -> Result<CharacterTrait, DomainError> {
    let id = require_string(field(raw, "id"), "id")?;
    let name = require_string(field(raw, "name"), "name")?;

    let points = field(raw, "calc")
        .and_then(|c| field(c, "points"))
        .and_then(Value::as_f64);

    let tags = field(raw, "tags")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let replacements = field(raw, "replacements")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect::<BTreeMap<String, String>>()
        });

    CharacterTrait::new(CharacterTraitInput {
        id,
        name,
        points,
        base_points: field(raw, "base_points").and_then(Value::as_f64),
        tags,
        description: field(raw, "description")
            .and_then(Value::as_str)
            .map(str::to_string),
        reference: field(raw, "reference")
            .and_then(Value::as_str)
            .map(str::to_string),
        replacements,
        local_notes: field(raw, "local_notes")
            .and_then(Value::as_str)
            .map(str::to_string),
        can_level: field(raw, "can_level")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        points_per_level: field(raw, "points_per_level").and_then(Value::as_f64),
        levels: field(raw, "levels").and_then(Value::as_f64),
    })
}
