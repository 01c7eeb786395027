//! Frozen value objects composed into the character document.

mod attributes;
mod basic;
mod profile;

pub use attributes::{AttributeSet, AttributeSetInput};
pub use basic::{CharacterBasic, CharacterBasicInput};
pub use profile::{CharacterProfile, CharacterProfileInput};
