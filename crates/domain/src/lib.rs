//! Domain model for character sheet documents.
//!
//! Immutable, validated types built from already-parsed input. Construction
//! goes through `new` functions that return `Result`; once built, a value is
//! internally consistent and read-only. Raw JSON handling lives in the
//! parser crate, not here.

pub mod common;
pub mod entities;
pub mod error;
pub mod guards;
pub mod tree;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Character, CharacterDocument, CharacterTrait, CharacterTraitInput, DamageType, Equipment,
    EquipmentCalc, EquipmentInput, Skill, SkillCalc, SkillInput, Spell, SpellInput, Weapon,
    WeaponCalc, WeaponDamage, WeaponDefault, WeaponInput,
};

pub use error::DomainError;

// Re-export structural guards (explicit list in guards/mod.rs)
pub use guards::{
    is_attribute_set, is_character, is_character_basic, is_character_profile, is_equipment,
    is_skill, is_spell, is_trait, is_weapon,
};

// Re-export tree queries
pub use tree::{depth, filter, find_by_id, flatten, for_each, map, statistics, TreeStatistics};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    AttributeSet, AttributeSetInput, CharacterBasic, CharacterBasicInput, CharacterProfile,
    CharacterProfileInput,
};
