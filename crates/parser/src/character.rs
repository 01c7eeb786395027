//! Character assembly - basic block, profile, and attribute resolution.
//!
//! All paths here fail fast: the first invalid scalar aborts the whole
//! character parse. Only the equipment subtree accumulates errors.

use serde_json::Value;
use sheetforge_domain::{
    AttributeSet, AttributeSetInput, Character, CharacterBasic, CharacterBasicInput,
    CharacterProfile, CharacterProfileInput, DomainError,
};
use tracing::debug;

use crate::extract::{field, optional_number, optional_string, require_number, require_string, type_name};

/// Assembles the three core character blocks from a raw document value.
pub fn parse_character(data: &Value) -> Result<Character, DomainError> {
    if !data.is_object() {
        return Err(DomainError::structural(format!(
            "character document must be an object, got {}",
            type_name(data)
        )));
    }
    debug!("assembling character core");

    let basic = parse_basic(data)?;
    let profile = parse_profile(data.get("profile"))?;
    let attributes = parse_attributes(data.get("attributes"))?;

    Ok(Character {
        basic,
        profile,
        attributes,
    })
}

/// Parses the top-level identity fields into a [`CharacterBasic`].
pub fn parse_basic(data: &Value) -> Result<CharacterBasic, DomainError> {
    let version = require_number(field(data, "version"), "version")? as i64;
    let id = require_string(field(data, "id"), "id")?;
    let total_points = require_number(field(data, "total_points"), "total_points")?;
    let created_date = require_string(field(data, "created_date"), "created_date")?;
    let modified_date = require_string(field(data, "modified_date"), "modified_date")?;

    CharacterBasic::new(CharacterBasicInput {
        version,
        id,
        total_points,
        created_date,
        modified_date,
    })
}

/// Parses the `profile` block. Height and weight arrive as display strings
/// and are normalized to metric by the field extractor.
pub fn parse_profile(data: Option<&Value>) -> Result<CharacterProfile, DomainError> {
    let profile = match data {
        Some(v) if v.is_object() => v,
        Some(v) => {
            return Err(DomainError::structural(format!(
                "profile must be an object, got {}",
                type_name(v)
            )))
        }
        None => return Err(DomainError::missing_field("profile")),
    };

    let input = CharacterProfileInput {
        name: require_string(field(profile, "name"), "profile.name")?,
        player_name: require_string(field(profile, "player_name"), "profile.player_name")?,
        age: optional_number(field(profile, "age"), "profile.age")?,
        birthday: optional_string(field(profile, "birthday"), "profile.birthday")?,
        eyes: optional_string(field(profile, "eyes"), "profile.eyes")?,
        hair: optional_string(field(profile, "hair"), "profile.hair")?,
        skin: optional_string(field(profile, "skin"), "profile.skin")?,
        handedness: optional_string(field(profile, "handedness"), "profile.handedness")?,
        gender: optional_string(field(profile, "gender"), "profile.gender")?,
        height: optional_number(field(profile, "height"), "profile.height")?,
        weight: optional_number(field(profile, "weight"), "profile.weight")?,
        tech_level: optional_number(field(profile, "tech_level"), "profile.tech_level")?,
        portrait: optional_string(field(profile, "portrait"), "profile.portrait")?,
    };

    CharacterProfile::new(input)
}

/// Resolves the keyed attribute array into a validated [`AttributeSet`].
///
/// The array is order-independent and the first record per `attr_id` wins.
/// Only the four primaries are required from the document; every other value
/// defaults programmatically inside [`AttributeSet::new`].
pub fn parse_attributes(data: Option<&Value>) -> Result<AttributeSet, DomainError> {
    let records = match data {
        Some(Value::Array(records)) => records,
        Some(v) => {
            return Err(DomainError::structural(format!(
                "attributes must be an array, got {}",
                type_name(v)
            )))
        }
        None => return Err(DomainError::missing_field("attributes")),
    };

    let input = AttributeSetInput {
        st: primary_value(records, "st")?,
        dx: primary_value(records, "dx")?,
        iq: primary_value(records, "iq")?,
        ht: primary_value(records, "ht")?,
        will: attribute_value(records, "will")?,
        per: attribute_value(records, "per")?,
        basic_speed: attribute_value(records, "basic_speed")?,
        basic_move: attribute_value(records, "basic_move")?,
        hit_points: attribute_value(records, "hp")?,
        fatigue_points: attribute_value(records, "fp")?,
        magic_points: attribute_value(records, "magic_points")?,
    };

    AttributeSet::new(input)
}

fn primary_value(records: &[Value], attr_id: &str) -> Result<f64, DomainError> {
    attribute_value(records, attr_id)?
        .ok_or_else(|| DomainError::missing_field(format!("attributes.{attr_id}")))
}

/// Looks up one attribute record by id and reads its `calc.value`.
///
/// A record whose `calc` block is missing or malformed counts as absent; a
/// `calc` block whose `value` is not a number is an error.
fn attribute_value(records: &[Value], attr_id: &str) -> Result<Option<f64>, DomainError> {
    let record = records
        .iter()
        .find(|r| r.get("attr_id").and_then(Value::as_str) == Some(attr_id));
    let Some(record) = record else {
        return Ok(None);
    };
    let Some(calc) = record.get("calc").filter(|c| c.is_object()) else {
        return Ok(None);
    };
    match calc.get("value") {
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| {
                DomainError::wrong_type(
                    format!("attributes.{attr_id}.calc.value"),
                    "a number",
                    type_name(value),
                )
            }),
        None => Err(DomainError::missing_field(format!(
            "attributes.{attr_id}.calc.value"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attr(id: &str, value: f64) -> Value {
        json!({ "attr_id": id, "calc": { "value": value } })
    }

    fn primaries() -> Value {
        json!([attr("st", 12.0), attr("dx", 13.0), attr("iq", 12.0), attr("ht", 13.0)])
    }

    #[test]
    fn test_attribute_defaulting_end_to_end() {
        let attrs = parse_attributes(Some(&primaries())).expect("valid primaries");
        assert_eq!(attrs.will(), 12.0);
        assert_eq!(attrs.per(), 12.0);
        assert_eq!(attrs.basic_speed(), 6.5);
        assert_eq!(attrs.basic_move(), 6.0);
        assert_eq!(attrs.hit_points(), 12.0);
        assert_eq!(attrs.fatigue_points(), 13.0);
    }

    #[test]
    fn test_missing_primary_fails() {
        let data = json!([attr("st", 10.0), attr("dx", 10.0), attr("iq", 10.0)]);
        let err = parse_attributes(Some(&data)).unwrap_err();
        assert_eq!(err, DomainError::missing_field("attributes.ht"));
    }

    #[test]
    fn test_first_record_wins_on_duplicates() {
        let data = json!([
            attr("st", 14.0),
            attr("st", 9.0),
            attr("dx", 10.0),
            attr("iq", 10.0),
            attr("ht", 10.0)
        ]);
        let attrs = parse_attributes(Some(&data)).expect("valid");
        assert_eq!(attrs.st(), 14.0);
    }

    #[test]
    fn test_non_numeric_calc_value_fails() {
        let data = json!([
            { "attr_id": "st", "calc": { "value": "twelve" } },
            attr("dx", 10.0),
            attr("iq", 10.0),
            attr("ht", 10.0)
        ]);
        let err = parse_attributes(Some(&data)).unwrap_err();
        assert!(err.to_string().contains("attributes.st.calc.value"));
    }

    #[test]
    fn test_attributes_must_be_an_array() {
        let data = json!({ "st": 12 });
        let err = parse_attributes(Some(&data)).unwrap_err();
        assert!(matches!(err, DomainError::StructuralMismatch(_)));
    }

    #[test]
    fn test_parse_basic() {
        let data = json!({
            "version": 4,
            "id": "ABC-123",
            "total_points": 150,
            "created_date": "2023-06-15T10:30:00-03:00",
            "modified_date": "2023-06-20T08:00:00-03:00"
        });
        let basic = parse_basic(&data).expect("valid");
        assert_eq!(basic.version(), 4);
        assert_eq!(basic.total_points(), 150.0);
    }

    #[test]
    fn test_parse_profile_converts_units() {
        let data = json!({
            "name": "Aldric",
            "player_name": "Sam",
            "height": "6'2\"",
            "weight": "175 lb"
        });
        let profile = parse_profile(Some(&data)).expect("valid");
        let height = profile.height().expect("present");
        assert!((height - 1.8796).abs() < 1e-4);
        let weight = profile.weight().expect("present");
        assert!((weight - 79.3786).abs() < 1e-4);
    }

    #[test]
    fn test_parse_character_requires_object() {
        let err = parse_character(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, DomainError::StructuralMismatch(_)));
    }
}
