//! Skill entity - one learned skill with its computed level snapshot.

use serde::{Deserialize, Serialize};

use crate::common::is_blank;
use crate::error::DomainError;

/// Computed level snapshot copied through from the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCalc {
    pub level: i32,
    /// Relative skill level display string (e.g. "DX+2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsl: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillInput {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub calc: Option<SkillCalc>,
    pub specialization: Option<String>,
    pub reference: Option<String>,
    pub tags: Vec<String>,
    pub tech_level: Option<String>,
    pub points: Option<f64>,
}

/// One validated skill. The effective `level` is the document's `calc.level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    id: String,
    name: String,
    level: i32,
    difficulty: String,
    calc: SkillCalc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tech_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    points: Option<f64>,
}

impl Skill {
    pub fn new(input: SkillInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if is_blank(&input.id) {
            errors.push("missing required field: id".to_string());
        }
        if is_blank(&input.name) {
            errors.push("missing required field: name".to_string());
        }
        if is_blank(&input.difficulty) {
            errors.push("missing required field: difficulty".to_string());
        }
        if input.calc.is_none() {
            errors.push("missing required field: calc.level".to_string());
        }

        let Some(calc) = input.calc else {
            return Err(DomainError::invalid(errors));
        };
        if !errors.is_empty() {
            return Err(DomainError::invalid(errors));
        }

        Ok(Self {
            id: input.id.trim().to_string(),
            name: input.name.trim().to_string(),
            level: calc.level,
            difficulty: input.difficulty.trim().to_string(),
            calc,
            specialization: input.specialization,
            reference: input.reference,
            tags: input.tags,
            tech_level: input.tech_level,
            points: input.points,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn calc(&self) -> &SkillCalc {
        &self.calc
    }

    pub fn specialization(&self) -> Option<&str> {
        self.specialization.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tech_level(&self) -> Option<&str> {
        self.tech_level.as_deref()
    }

    pub fn points(&self) -> Option<f64> {
        self.points
    }
}
