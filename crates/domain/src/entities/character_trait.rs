//! CharacterTrait entity - advantages, disadvantages, quirks, languages.
//!
//! Traits carry the pipeline's only cross-field invariants:
//! - a name containing the templating marker `@` must carry a non-empty
//!   `replacements` map, and vice-versa;
//! - a trait cannot be tagged both "Advantage" and "Disadvantage";
//! - a leveled trait (`can_level`) must declare `points_per_level` and
//!   `levels`.
//!
//! The sign of `points` is intentionally NOT checked against the
//! advantage/disadvantage tags; real documents violate that rule (e.g.
//! zero-cost language advantages).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::is_blank;
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct CharacterTraitInput {
    pub id: String,
    pub name: String,
    /// The document's `calc.points` value
    pub points: Option<f64>,
    pub base_points: Option<f64>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub replacements: Option<BTreeMap<String, String>>,
    pub local_notes: Option<String>,
    pub can_level: bool,
    pub points_per_level: Option<f64>,
    pub levels: Option<f64>,
}

/// One validated trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTrait {
    id: String,
    name: String,
    points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_points: Option<f64>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replacements: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    local_notes: Option<String>,
    #[serde(default)]
    can_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    points_per_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    levels: Option<f64>,
}

impl CharacterTrait {
    pub fn new(input: CharacterTraitInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if is_blank(&input.id) {
            errors.push("missing required field: id".to_string());
        }
        if is_blank(&input.name) {
            errors.push("missing required field: name".to_string());
        }
        if input.points.is_none() {
            errors.push("missing required field: calc.points".to_string());
        }

        let templated = input.name.contains('@');
        let has_replacements = input
            .replacements
            .as_ref()
            .is_some_and(|map| !map.is_empty());
        if templated && !has_replacements {
            errors.push(format!(
                "trait {:?} has an @ marker but no replacements",
                input.name
            ));
        }
        if !templated && has_replacements {
            errors.push(format!(
                "trait {:?} has replacements but no @ marker in its name",
                input.name
            ));
        }

        let advantage = input.tags.iter().any(|t| t == "Advantage");
        let disadvantage = input.tags.iter().any(|t| t == "Disadvantage");
        if advantage && disadvantage {
            errors.push(format!(
                "trait {:?} cannot be both Advantage and Disadvantage",
                input.name
            ));
        }

        if input.can_level && (input.points_per_level.is_none() || input.levels.is_none()) {
            errors.push(format!(
                "leveled trait {:?} must declare pointsPerLevel and levels",
                input.name
            ));
        }

        let Some(points) = input.points else {
            return Err(DomainError::invalid(errors));
        };
        if !errors.is_empty() {
            return Err(DomainError::invalid(errors));
        }

        Ok(Self {
            id: input.id.trim().to_string(),
            name: input.name.trim().to_string(),
            points,
            base_points: input.base_points,
            tags: input.tags,
            description: input.description,
            reference: input.reference,
            replacements: input.replacements,
            local_notes: input.local_notes,
            can_level: input.can_level,
            points_per_level: input.points_per_level,
            levels: input.levels,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn base_points(&self) -> Option<f64> {
        self.base_points
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn replacements(&self) -> Option<&BTreeMap<String, String>> {
        self.replacements.as_ref()
    }

    pub fn local_notes(&self) -> Option<&str> {
        self.local_notes.as_deref()
    }

    pub fn can_level(&self) -> bool {
        self.can_level
    }

    pub fn points_per_level(&self) -> Option<f64> {
        self.points_per_level
    }

    pub fn levels(&self) -> Option<f64> {
        self.levels
    }

    pub fn is_advantage(&self) -> bool {
        self.tags.iter().any(|t| t == "Advantage")
    }

    pub fn is_disadvantage(&self) -> bool {
        self.tags.iter().any(|t| t == "Disadvantage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str) -> CharacterTraitInput {
        CharacterTraitInput {
            id: "t1".to_string(),
            name: name.to_string(),
            points: Some(10.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_trait() {
        let t = CharacterTrait::new(plain("Combat Reflexes")).expect("valid input");
        assert_eq!(t.points(), 10.0);
        assert!(!t.is_advantage());
    }

    #[test]
    fn test_templated_name_requires_replacements() {
        let err = CharacterTrait::new(plain("Resistant to @Substance")).unwrap_err();
        assert!(err.to_string().contains("no replacements"));
    }

    #[test]
    fn test_templated_name_with_replacements_succeeds() {
        let mut replacements = BTreeMap::new();
        replacements.insert("@Substance".to_string(), "Poison".to_string());
        let input = CharacterTraitInput {
            replacements: Some(replacements),
            ..plain("Resistant to @Substance")
        };
        let t = CharacterTrait::new(input).expect("valid input");
        assert_eq!(
            t.replacements().and_then(|m| m.get("@Substance")).map(String::as_str),
            Some("Poison")
        );
    }

    #[test]
    fn test_replacements_without_marker_rejected() {
        let mut replacements = BTreeMap::new();
        replacements.insert("@X".to_string(), "Y".to_string());
        let input = CharacterTraitInput {
            replacements: Some(replacements),
            ..plain("Plain")
        };
        let err = CharacterTrait::new(input).unwrap_err();
        assert!(err.to_string().contains("no @ marker"));
    }

    #[test]
    fn test_empty_replacements_map_counts_as_absent() {
        let input = CharacterTraitInput {
            replacements: Some(BTreeMap::new()),
            ..plain("Resistant to @Substance")
        };
        assert!(CharacterTrait::new(input).is_err());
    }

    #[test]
    fn test_advantage_and_disadvantage_conflict() {
        let input = CharacterTraitInput {
            tags: vec!["Advantage".to_string(), "Disadvantage".to_string()],
            ..plain("Odd Trait")
        };
        let err = CharacterTrait::new(input).unwrap_err();
        assert!(err.to_string().contains("both Advantage and Disadvantage"));
    }

    #[test]
    fn test_negative_points_allowed_for_advantage_tag() {
        // Real documents carry e.g. language advantages with non-positive
        // cost; the sign rule is deliberately not enforced.
        let input = CharacterTraitInput {
            points: Some(0.0),
            tags: vec!["Advantage".to_string(), "Language".to_string()],
            ..plain("Language: Common")
        };
        let t = CharacterTrait::new(input).expect("valid input");
        assert!(t.is_advantage());
        assert_eq!(t.points(), 0.0);
    }

    #[test]
    fn test_leveled_trait_requires_level_fields() {
        let input = CharacterTraitInput {
            can_level: true,
            ..plain("Magery")
        };
        let err = CharacterTrait::new(input).unwrap_err();
        assert!(err.to_string().contains("pointsPerLevel"));

        let input = CharacterTraitInput {
            can_level: true,
            points_per_level: Some(10.0),
            levels: Some(3.0),
            ..plain("Magery")
        };
        let t = CharacterTrait::new(input).expect("valid input");
        assert!(t.can_level());
        assert_eq!(t.levels(), Some(3.0));
    }
}
