//! Spell entity.

use serde::{Deserialize, Serialize};

use crate::common::is_blank;
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct SpellInput {
    pub id: String,
    pub name: String,
    pub level: Option<i32>,
    pub college: String,
}

/// One validated spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    id: String,
    name: String,
    level: i32,
    college: String,
}

impl Spell {
    pub fn new(input: SpellInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if is_blank(&input.id) {
            errors.push("missing required field: id".to_string());
        }
        if is_blank(&input.name) {
            errors.push("missing required field: name".to_string());
        }
        if input.level.is_none() {
            errors.push("missing required field: level".to_string());
        }
        if is_blank(&input.college) {
            errors.push("missing required field: college".to_string());
        }

        let Some(level) = input.level else {
            return Err(DomainError::invalid(errors));
        };
        if !errors.is_empty() {
            return Err(DomainError::invalid(errors));
        }

        Ok(Self {
            id: input.id.trim().to_string(),
            name: input.name.trim().to_string(),
            level,
            college: input.college.trim().to_string(),
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

    pub fn college(&self) -> &str {
        &self.college
    }
}
