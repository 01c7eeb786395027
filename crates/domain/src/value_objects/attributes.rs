//! AttributeSet - the eight-plus named character attributes
//!
//! The generator tool emits attributes as an unordered keyed array; the
//! resolver in the parser crate turns that into an [`AttributeSetInput`] and
//! this constructor applies the canonical defaulting rules and range checks.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Raw resolved values handed to [`AttributeSet::new`].
///
/// Only the four primaries are mandatory; everything else defaults
/// programmatically inside the constructor, never from the document.
#[derive(Debug, Clone, Default)]
pub struct AttributeSetInput {
    pub st: f64,
    pub dx: f64,
    pub iq: f64,
    pub ht: f64,
    pub will: Option<f64>,
    pub per: Option<f64>,
    pub basic_speed: Option<f64>,
    pub basic_move: Option<f64>,
    pub hit_points: Option<f64>,
    pub fatigue_points: Option<f64>,
    pub magic_points: Option<f64>,
}

/// Validated, immutable attribute block for one character.
///
/// Defaulting rules (applied when the input omits a value):
/// - `will`, `per` default to `iq`
/// - `basic_speed` defaults to `(dx + ht) / 4`
/// - `basic_move` defaults to `basic_speed.floor()`
/// - `hit_points` defaults to `st`
/// - `fatigue_points` defaults to `ht`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSet {
    st: f64,
    dx: f64,
    iq: f64,
    ht: f64,
    will: f64,
    per: f64,
    basic_speed: f64,
    basic_move: f64,
    hit_points: f64,
    fatigue_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    magic_points: Option<f64>,
}

impl AttributeSet {
    /// Applies defaults, checks every numeric invariant, and constructs the
    /// set. All violations are collected into [`DomainError::Invalid`].
    pub fn new(input: AttributeSetInput) -> Result<Self, DomainError> {
        let will = input.will.unwrap_or(input.iq);
        let per = input.per.unwrap_or(input.iq);
        let basic_speed = input.basic_speed.unwrap_or((input.dx + input.ht) / 4.0);
        let basic_move = input.basic_move.unwrap_or_else(|| basic_speed.floor());
        let hit_points = input.hit_points.unwrap_or(input.st);
        let fatigue_points = input.fatigue_points.unwrap_or(input.ht);

        let mut errors = Vec::new();

        for (name, value) in [
            ("st", input.st),
            ("dx", input.dx),
            ("iq", input.iq),
            ("ht", input.ht),
            ("will", will),
            ("per", per),
        ] {
            if !value.is_finite() {
                errors.push(format!("field {name} must be a finite number, got {value}"));
            } else if value < 1.0 {
                errors.push(format!("field {name} must be at least 1, got {value}"));
            }
        }

        if !basic_speed.is_finite() || basic_speed <= 0.0 {
            errors.push(format!(
                "field basicSpeed must be a positive number, got {basic_speed}"
            ));
        }
        if !basic_move.is_finite() || basic_move < 0.0 {
            errors.push(format!(
                "field basicMove must be a non-negative number, got {basic_move}"
            ));
        }
        if !hit_points.is_finite() {
            errors.push(format!(
                "field hitPoints must be a finite number, got {hit_points}"
            ));
        }
        if !fatigue_points.is_finite() || fatigue_points < 1.0 {
            errors.push(format!(
                "field fatiguePoints must be at least 1, got {fatigue_points}"
            ));
        }
        if let Some(mp) = input.magic_points {
            if !mp.is_finite() || mp < 0.0 {
                errors.push(format!(
                    "field magicPoints must be a non-negative number, got {mp}"
                ));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::invalid(errors));
        }

        Ok(Self {
            st: input.st,
            dx: input.dx,
            iq: input.iq,
            ht: input.ht,
            will,
            per,
            basic_speed,
            basic_move,
            hit_points,
            fatigue_points,
            magic_points: input.magic_points,
        })
    }

    pub fn st(&self) -> f64 {
        self.st
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn iq(&self) -> f64 {
        self.iq
    }

    pub fn ht(&self) -> f64 {
        self.ht
    }

    pub fn will(&self) -> f64 {
        self.will
    }

    pub fn per(&self) -> f64 {
        self.per
    }

    pub fn basic_speed(&self) -> f64 {
        self.basic_speed
    }

    pub fn basic_move(&self) -> f64 {
        self.basic_move
    }

    pub fn hit_points(&self) -> f64 {
        self.hit_points
    }

    pub fn fatigue_points(&self) -> f64 {
        self.fatigue_points
    }

    pub fn magic_points(&self) -> Option<f64> {
        self.magic_points
    }

    /// Classic attribute modifier: `floor((value - 10) / 2)`.
    fn modifier(value: f64) -> i32 {
        ((value - 10.0) / 2.0).floor() as i32
    }

    pub fn st_modifier(&self) -> i32 {
        Self::modifier(self.st)
    }

    pub fn dx_modifier(&self) -> i32 {
        Self::modifier(self.dx)
    }

    pub fn iq_modifier(&self) -> i32 {
        Self::modifier(self.iq)
    }

    pub fn ht_modifier(&self) -> i32 {
        Self::modifier(self.ht)
    }

    pub fn will_modifier(&self) -> i32 {
        Self::modifier(self.will)
    }

    pub fn per_modifier(&self) -> i32 {
        Self::modifier(self.per)
    }
}

impl std::fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Attributes{{ST:{} DX:{} IQ:{} HT:{} HP:{} FP:{}",
            self.st, self.dx, self.iq, self.ht, self.hit_points, self.fatigue_points
        )?;
        if let Some(mp) = self.magic_points {
            write!(f, " MP:{mp}")?;
        }
        write!(f, "}}")
    }
}
