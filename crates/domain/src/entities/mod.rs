//! Domain entities assembled from a raw character document.

mod character;
mod character_trait;
mod equipment;
mod skill;
mod spell;
mod weapon;

pub use character::{Character, CharacterDocument};
pub use character_trait::{CharacterTrait, CharacterTraitInput};
pub use equipment::{Equipment, EquipmentCalc, EquipmentInput};
pub use skill::{Skill, SkillCalc, SkillInput};
pub use spell::{Spell, SpellInput};
pub use weapon::{DamageType, Weapon, WeaponCalc, WeaponDamage, WeaponDefault, WeaponInput};
