//! Skill list assembly. Fail-fast: the first invalid entry aborts the parse.

use serde_json::Value;
use sheetforge_domain::{DomainError, Skill, SkillCalc, SkillInput};

use crate::extract::{field, require_string, type_name};

/// Parses the `skills` array. Non-object entries are skipped; an invalid
/// object entry fails the whole list.
pub fn parse_skills(data: &Value) -> Result<Vec<Skill>, DomainError> {
    let Value::Array(records) = data else {
        return Err(DomainError::structural(format!(
            "skills must be an array, got {}",
            type_name(data)
        )));
    };

    let mut skills = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_object() {
            continue;
        }
        skills.push(parse_skill(record)?);
    }
    Ok(skills)
}

fn parse_skill(raw: &Value) -> Result<Skill, DomainError> {
    let id = require_string(field(raw, "id"), "id")?;
    let name = require_string(field(raw, "name"), "name")?;
    let difficulty = require_string(field(raw, "difficulty"), "difficulty")?;

    // The effective level always comes from the document's calc snapshot.
    let calc = field(raw, "calc").map(|c| -> Result<SkillCalc, DomainError> {
        let level = field(c, "level")
            .and_then(Value::as_i64)
            .ok_or_else(|| DomainError::missing_field("calc.level"))?;
        Ok(SkillCalc {
            level: level as i32,
            rsl: field(c, "rsl").and_then(Value::as_str).map(str::to_string),
        })
    });
    let calc = calc.transpose()?;

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

    Skill::new(SkillInput {
        id,
        name,
        difficulty,
        calc,
        specialization: field(raw, "specialization")
            .and_then(Value::as_str)
            .map(str::to_string),
        reference: field(raw, "reference")
            .and_then(Value::as_str)
            .map(str::to_string),
        tags,
        tech_level: field(raw, "tech_level")
            .and_then(Value::as_str)
            .map(str::to_string),
        points: field(raw, "points").and_then(Value::as_f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_valid_skill_list() {
        let data = json!([
            {
                "id": "s1",
                "name": "Stealth",
                "difficulty": "dx/a",
                "points": 4,
                "calc": { "level": 14, "rsl": "DX+1" }
            },
            {
                "id": "s2",
                "name": "Broadsword",
                "difficulty": "dx/a",
                "calc": { "level": 16 }
            }
        ]);
        let skills = parse_skills(&data).expect("valid list");
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].level(), 14);
        assert_eq!(skills[1].name(), "Broadsword");
    }

    #[test]
    fn test_first_invalid_entry_fails_the_list() {
        let data = json!([
            { "id": "s1", "name": "Stealth", "difficulty": "dx/a", "calc": { "level": 14 } },
            { "id": "s2", "name": "Broken", "difficulty": "dx/a" }
        ]);
        let err = parse_skills(&data).unwrap_err();
        assert!(err.to_string().contains("calc.level"));
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let data = json!([
            "stray",
            { "id": "s1", "name": "Stealth", "difficulty": "dx/a", "calc": { "level": 12 } }
        ]);
        let skills = parse_skills(&data).expect("valid list");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_non_array_rejected() {
        let err = parse_skills(&json!({})).unwrap_err();
        assert!(matches!(err, DomainError::StructuralMismatch(_)));
    }
}
