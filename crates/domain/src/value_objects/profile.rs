//! CharacterProfile - personal and physical description of a character.
//!
//! Unit-bearing fields (`height`, `weight`) are already normalized to metric
//! by the field extractor before they reach this constructor.

use serde::{Deserialize, Serialize};

use crate::common::is_blank;
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct CharacterProfileInput {
    pub name: String,
    pub player_name: String,
    pub age: Option<f64>,
    pub birthday: Option<String>,
    pub eyes: Option<String>,
    pub hair: Option<String>,
    pub skin: Option<String>,
    pub handedness: Option<String>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub tech_level: Option<f64>,
    pub portrait: Option<String>,
}

/// Personal data block. `height` is meters, `weight` kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    name: String,
    player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    eyes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hair: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    handedness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tech_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    portrait: Option<String>,
}

impl CharacterProfile {
    pub fn new(input: CharacterProfileInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if is_blank(&input.name) {
            errors.push("missing required field: name".to_string());
        }
        if is_blank(&input.player_name) {
            errors.push("missing required field: playerName".to_string());
        }

        for (field, value) in [
            ("age", input.age),
            ("height", input.height),
            ("weight", input.weight),
            ("techLevel", input.tech_level),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    errors.push(format!(
                        "field {field} must be a non-negative number, got {v}"
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::invalid(errors));
        }

        Ok(Self {
            name: input.name.trim().to_string(),
            player_name: input.player_name.trim().to_string(),
            age: input.age,
            birthday: input.birthday,
            eyes: input.eyes,
            hair: input.hair,
            skin: input.skin,
            handedness: input.handedness,
            gender: input.gender,
            height: input.height,
            weight: input.weight,
            tech_level: input.tech_level,
            portrait: input.portrait,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn age(&self) -> Option<f64> {
        self.age
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    pub fn eyes(&self) -> Option<&str> {
        self.eyes.as_deref()
    }

    pub fn hair(&self) -> Option<&str> {
        self.hair.as_deref()
    }

    pub fn skin(&self) -> Option<&str> {
        self.skin.as_deref()
    }

    pub fn handedness(&self) -> Option<&str> {
        self.handedness.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    /// Height in meters.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn tech_level(&self) -> Option<f64> {
        self.tech_level
    }

    pub fn portrait(&self) -> Option<&str> {
        self.portrait.as_deref()
    }
}

impl std::fmt::Display for CharacterProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CharacterProfile{{\"{}\" by {}}}",
            self.name, self.player_name
        )
    }
}
