//! Assembly pipeline for character sheet documents.
//!
//! Takes an in-memory `serde_json::Value` (a parsed generator file) and
//! produces validated domain objects. The equipment subtree accumulates
//! every error it finds before failing; every other path fails fast on the
//! first invalid field. Reading the raw file and deserializing it is the
//! caller's job.

pub mod character;
pub mod document;
pub mod equipment;
mod extract;
pub mod report;
pub mod schema;
pub mod skills;
pub mod spells;
pub mod traits;

pub use character::{parse_attributes, parse_basic, parse_character, parse_profile};
pub use document::parse_document;
pub use equipment::{parse_equipment, parse_equipment_list};
pub use extract::{optional_number, optional_string, require_number, require_string};
pub use report::ParseReport;
pub use schema::{detect, SchemaVersion};
pub use skills::parse_skills;
pub use spells::parse_spells;
pub use traits::parse_traits;
