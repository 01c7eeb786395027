//! Weapon entity - attack modes attached to a piece of equipment.
//!
//! A weapon is owned exclusively by its parent [`Equipment`](super::Equipment)
//! node. Its `calc` block is an externally pre-computed display snapshot and is
//! stored verbatim, never recomputed.

use serde::{Deserialize, Serialize};

use crate::common::is_blank;
use crate::error::DomainError;

/// Closed damage-type vocabulary used by the generator tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    #[serde(rename = "pi")]
    Piercing,
    #[serde(rename = "cut")]
    Cutting,
    #[serde(rename = "cr")]
    Crushing,
    #[serde(rename = "imp")]
    Impaling,
    #[serde(rename = "burn")]
    Burning,
    #[serde(rename = "tox")]
    Toxic,
    #[serde(rename = "cor")]
    Corrosion,
    #[serde(rename = "spec")]
    Special,
    /// Unknown type for forward compatibility
    #[serde(other, rename = "unk")]
    Unknown,
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::Piercing => "pi",
            Self::Cutting => "cut",
            Self::Crushing => "cr",
            Self::Impaling => "imp",
            Self::Burning => "burn",
            Self::Toxic => "tox",
            Self::Corrosion => "cor",
            Self::Special => "spec",
            Self::Unknown => "unk",
        };
        write!(f, "{token}")
    }
}

impl std::str::FromStr for DamageType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pi" => Ok(Self::Piercing),
            "cut" => Ok(Self::Cutting),
            "cr" => Ok(Self::Crushing),
            "imp" => Ok(Self::Impaling),
            "burn" => Ok(Self::Burning),
            "tox" => Ok(Self::Toxic),
            "cor" => Ok(Self::Corrosion),
            "spec" => Ok(Self::Special),
            _ => Ok(Self::Unknown),
        }
    }
}

/// Damage specification for one attack mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDamage {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    /// Fixed value or dice expression (e.g. "4d+2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// ST-based damage kind ("sw" or "thr")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st: Option<String>,
}

/// A skill or attribute the weapon's level can default from.
///
/// A skill default always carries a name; that requirement is part of the
/// type, not a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponDefault {
    Skill {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specialization: Option<String>,
        #[serde(default)]
        modifier: i32,
    },
    Attribute {
        attribute: String,
        #[serde(default)]
        modifier: i32,
    },
}

/// Pre-computed display snapshot copied through from the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeaponCalc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WeaponInput {
    pub id: String,
    pub damage: Option<WeaponDamage>,
    pub strength: Option<String>,
    pub accuracy: Option<String>,
    pub range: Option<String>,
    pub rate_of_fire: Option<String>,
    pub shots: Option<String>,
    pub bulk: Option<String>,
    pub recoil: Option<String>,
    pub usage: Option<String>,
    pub reach: Option<String>,
    pub parry: Option<String>,
    pub defaults: Vec<WeaponDefault>,
    pub calc: Option<WeaponCalc>,
}

/// One validated attack mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    id: String,
    damage: WeaponDamage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rate_of_fire: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bulk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recoil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parry: Option<String>,
    #[serde(default)]
    defaults: Vec<WeaponDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calc: Option<WeaponCalc>,
}

impl Weapon {
    pub fn new(input: WeaponInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if is_blank(&input.id) {
            errors.push("missing required field: id".to_string());
        }
        if input.damage.is_none() {
            errors.push("missing required field: damage".to_string());
        }

        let Some(damage) = input.damage else {
            return Err(DomainError::invalid(errors));
        };
        if !errors.is_empty() {
            return Err(DomainError::invalid(errors));
        }

        Ok(Self {
            id: input.id.trim().to_string(),
            damage,
            strength: input.strength,
            accuracy: input.accuracy,
            range: input.range,
            rate_of_fire: input.rate_of_fire,
            shots: input.shots,
            bulk: input.bulk,
            recoil: input.recoil,
            usage: input.usage,
            reach: input.reach,
            parry: input.parry,
            defaults: input.defaults,
            calc: input.calc,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn damage(&self) -> &WeaponDamage {
        &self.damage
    }

    pub fn strength(&self) -> Option<&str> {
        self.strength.as_deref()
    }

    pub fn accuracy(&self) -> Option<&str> {
        self.accuracy.as_deref()
    }

    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    pub fn rate_of_fire(&self) -> Option<&str> {
        self.rate_of_fire.as_deref()
    }

    pub fn shots(&self) -> Option<&str> {
        self.shots.as_deref()
    }

    pub fn bulk(&self) -> Option<&str> {
        self.bulk.as_deref()
    }

    pub fn recoil(&self) -> Option<&str> {
        self.recoil.as_deref()
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn reach(&self) -> Option<&str> {
        self.reach.as_deref()
    }

    pub fn parry(&self) -> Option<&str> {
        self.parry.as_deref()
    }

    pub fn defaults(&self) -> &[WeaponDefault] {
        &self.defaults
    }

    pub fn calc(&self) -> Option<&WeaponCalc> {
        self.calc.as_ref()
    }

    /// Melee weapons are swung or thrust.
    pub fn is_melee(&self) -> bool {
        matches!(self.usage.as_deref(), Some("Swung") | Some("Thrust"))
    }

    /// Ranged weapons are thrown or carry a range band.
    pub fn is_ranged(&self) -> bool {
        self.usage.as_deref() == Some("Thrown") || self.range.is_some()
    }

    /// Whether damage scales with the wielder's ST.
    pub fn is_st_based(&self) -> bool {
        self.damage.st.is_some()
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Weapon{{{}", self.id)?;
        match self.calc.as_ref().and_then(|c| c.damage.as_deref()) {
            Some(formatted) => write!(f, ", {formatted}")?,
            None => {
                if let Some(base) = &self.damage.base {
                    write!(f, ", {base} {}", self.damage.damage_type)?;
                } else {
                    write!(f, ", {}", self.damage.damage_type)?;
                }
            }
        }
        if let Some(st) = &self.strength {
            write!(f, " (ST: {st})")?;
        }
        write!(f, "}}")
    }
}
