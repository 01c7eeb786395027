//! Character aggregate and the full document type produced by the pipeline.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AttributeSet, CharacterBasic, CharacterProfile};

use super::{CharacterTrait, Equipment, Skill, Spell};

/// The three independently-validated core blocks of a character.
///
/// Pure aggregate: each component enforces its own invariants at
/// construction, so any combination of valid components is a valid character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub basic: CharacterBasic,
    pub profile: CharacterProfile,
    pub attributes: AttributeSet,
}

/// One fully assembled character document: the core character plus the
/// carried/stored equipment forests and the flat skill/trait/spell lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    pub character: Character,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub other_equipment: Vec<Equipment>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub traits: Vec<CharacterTrait>,
    #[serde(default)]
    pub spells: Vec<Spell>,
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Character{{\"{}\" {}pts}}",
            self.profile.name(),
            self.basic.total_points()
        )
    }
}
