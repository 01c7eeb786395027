//! Document assembler - whole-document composition of every pipeline part.
//!
//! The character core and the flat skill/trait/spell lists fail fast; the
//! two equipment forests go through the accumulating node assembler and
//! surface their full error lists in one composite failure. Either a fully
//! valid document comes back or an error does; no partial document exists.

use serde_json::Value;
use sheetforge_domain::{CharacterDocument, DomainError, Equipment};
use tracing::{debug, warn};

use crate::character::parse_character;
use crate::equipment::parse_equipment_list;
use crate::extract::{field, type_name};
use crate::skills::parse_skills;
use crate::spells::parse_spells;
use crate::traits::parse_traits;

/// Assembles one full character document from a raw parsed JSON value.
pub fn parse_document(data: &Value) -> Result<CharacterDocument, DomainError> {
    if !data.is_object() {
        return Err(DomainError::structural(format!(
            "document must be an object, got {}",
            type_name(data)
        )));
    }
    debug!("assembling character document");

    let character = parse_character(data)?;

    let equipment = equipment_section(data, "equipment")?;
    let other_equipment = equipment_section(data, "other_equipment")?;

    let skills = match field(data, "skills") {
        Some(section) => parse_skills(section)?,
        None => Vec::new(),
    };
    let traits = match field(data, "traits") {
        Some(section) => parse_traits(section)?,
        None => Vec::new(),
    };
    let spells = match field(data, "spells") {
        Some(section) => parse_spells(section)?,
        None => Vec::new(),
    };

    debug!(
        equipment = equipment.len(),
        other_equipment = other_equipment.len(),
        skills = skills.len(),
        traits = traits.len(),
        spells = spells.len(),
        "character document assembled"
    );

    Ok(CharacterDocument {
        character,
        equipment,
        other_equipment,
        skills,
        traits,
        spells,
    })
}

/// A missing section is an empty forest; a present one must assemble fully.
fn equipment_section(data: &Value, key: &str) -> Result<Vec<Equipment>, DomainError> {
    let Some(section) = field(data, key) else {
        return Ok(Vec::new());
    };
    let report = parse_equipment_list(section);
    if !report.success() {
        warn!(
            section = key,
            errors = report.errors().len(),
            "equipment assembly failed"
        );
    }
    report.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attr(id: &str, value: f64) -> Value {
        json!({ "attr_id": id, "calc": { "value": value } })
    }

    fn minimal_document() -> Value {
        json!({
            "version": 4,
            "id": "ABC-123",
            "total_points": 150,
            "created_date": "2023-06-15T10:30:00-03:00",
            "modified_date": "2023-06-20T08:00:00-03:00",
            "profile": { "name": "Aldric", "player_name": "Sam" },
            "attributes": [
                attr("st", 12.0), attr("dx", 13.0), attr("iq", 12.0), attr("ht", 13.0)
            ]
        })
    }

    #[test]
    fn test_minimal_document_has_empty_sections() {
        let document = parse_document(&minimal_document()).expect("valid document");
        assert!(document.equipment.is_empty());
        assert!(document.other_equipment.is_empty());
        assert!(document.skills.is_empty());
        assert_eq!(document.character.profile.name(), "Aldric");
        assert_eq!(document.character.attributes.basic_speed(), 6.5);
    }

    #[test]
    fn test_equipment_errors_surface_in_composite() {
        let mut data = minimal_document();
        data["equipment"] = json!([{ "description": "nameless" }]);
        let err = parse_document(&data).unwrap_err();
        assert_eq!(err.messages(), vec!["missing required field: id".to_string()]);
    }

    #[test]
    fn test_character_failure_aborts_before_sections() {
        let mut data = minimal_document();
        data["attributes"] = json!([attr("st", 12.0)]);
        let err = parse_document(&data).unwrap_err();
        assert!(err.to_string().contains("attributes."));
    }

    #[test]
    fn test_non_object_document_rejected() {
        let err = parse_document(&json!("nope")).unwrap_err();
        assert!(matches!(err, DomainError::StructuralMismatch(_)));
    }
}
