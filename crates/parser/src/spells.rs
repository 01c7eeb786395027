//! Spell list assembly. Fail-fast.

use serde_json::Value;
use sheetforge_domain::{DomainError, Spell, SpellInput};

use crate::extract::{field, require_string, type_name};

/// Parses the `spells` array. Non-object entries are skipped; an invalid
/// object entry fails the whole list.
pub fn parse_spells(data: &Value) -> Result<Vec<Spell>, DomainError> {
    let Value::Array(records) = data else {
        return Err(DomainError::structural(format!(
            "spells must be an array, got {}",
            type_name(data)
        )));
    };

    let mut spells = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_object() {
            continue;
        }
        spells.push(parse_spell(record)?);
    }
    Ok(spells)
}

fn parse_spell(raw: &Value) -> Result<Spell, DomainError> {
    Spell::new(SpellInput {
        id: require_string(field(raw, "id"), "id")?,
        name: require_string(field(raw, "name"), "name")?,
        level: field(raw, "level")
            .or_else(|| field(raw, "calc").and_then(|c| field(c, "level")))
            .and_then(Value::as_i64)
            .map(|l| l as i32),
        college: field(raw, "college")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
    })
}
