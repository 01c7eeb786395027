//! Equipment entity - one node of the carried-gear hierarchy.
//!
//! Equipment forms a strict ownership tree: a node exclusively owns its
//! `children` and `weapons`, and children are always built fresh from nested
//! raw data, so cycles are impossible by construction. Aggregates
//! (`total_weight`, `total_cost`) are computed on demand; the optional `calc`
//! block is the generator's own pre-aggregated snapshot and is stored
//! verbatim, never recomputed.

use serde::{Deserialize, Serialize};

use crate::common::{is_blank, round2};
use crate::error::DomainError;

use super::weapon::Weapon;

/// Pre-aggregated subtree totals copied through from the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EquipmentCalc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_value: Option<f64>,
    /// Display string such as "7.3 lb", kept exactly as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_weight: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentInput {
    pub id: String,
    pub name: String,
    pub quantity: Option<u32>,
    pub weight: Option<f64>,
    pub cost: Option<f64>,
    pub children: Vec<Equipment>,
    pub weapons: Vec<Weapon>,
    pub calc: Option<EquipmentCalc>,
    pub description: Option<String>,
    pub tech_level: Option<u32>,
    pub legality_class: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}

/// One validated equipment node, possibly a container of further nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    id: String,
    name: String,
    quantity: u32,
    /// Unit weight in pounds
    weight: f64,
    /// Unit cost in dollars
    cost: f64,
    #[serde(default)]
    children: Vec<Equipment>,
    #[serde(default)]
    weapons: Vec<Weapon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calc: Option<EquipmentCalc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tech_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    legality_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Equipment {
    /// Validates every field, collecting all violations before failing.
    /// Defaults: `quantity` 1, `weight`/`cost` 0.
    pub fn new(input: EquipmentInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if is_blank(&input.id) {
            errors.push("missing required field: id".to_string());
        }
        if is_blank(&input.name) {
            errors.push("missing required field: name".to_string());
        }
        if let Some(q) = input.quantity {
            if q < 1 {
                errors.push(format!("field quantity must be at least 1, got {q}"));
            }
        }
        for (field, value) in [("weight", input.weight), ("cost", input.cost)] {
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
            id: input.id.trim().to_string(),
            name: input.name.trim().to_string(),
            quantity: input.quantity.unwrap_or(1),
            weight: input.weight.unwrap_or(0.0),
            cost: input.cost.unwrap_or(0.0),
            children: input.children,
            weapons: input.weapons,
            calc: input.calc,
            description: input.description,
            tech_level: input.tech_level,
            legality_class: input.legality_class,
            notes: input.notes,
            category: input.category,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit weight of one item, children excluded.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Unit cost of one item, children excluded.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn children(&self) -> &[Equipment] {
        &self.children
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn calc(&self) -> Option<&EquipmentCalc> {
        self.calc.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tech_level(&self) -> Option<u32> {
        self.tech_level
    }

    pub fn legality_class(&self) -> Option<&str> {
        self.legality_class.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// A node is a container only when it actually holds children; an
    /// explicit empty `children` array does not count.
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn has_weapons(&self) -> bool {
        !self.weapons.is_empty()
    }

    /// Total weight of the subtree: own weight scaled by quantity plus each
    /// child's total scaled by this node's quantity, rounded to two decimals
    /// at every aggregation step.
    pub fn total_weight(&self) -> f64 {
        let own = self.weight * f64::from(self.quantity);
        if self.children.is_empty() {
            return round2(own);
        }
        let children: f64 = self
            .children
            .iter()
            .map(|child| child.total_weight() * f64::from(self.quantity))
            .sum();
        round2(own + children)
    }

    /// Total cost of the subtree, same aggregation rule as [`total_weight`].
    ///
    /// [`total_weight`]: Equipment::total_weight
    pub fn total_cost(&self) -> f64 {
        let own = self.cost * f64::from(self.quantity);
        if self.children.is_empty() {
            return round2(own);
        }
        let children: f64 = self
            .children
            .iter()
            .map(|child| child.total_cost() * f64::from(self.quantity))
            .sum();
        round2(own + children)
    }

    /// Depth-first flattening of the subtree, excluding this node.
    pub fn all_children(&self) -> Vec<&Equipment> {
        let mut result = Vec::new();
        for child in &self.children {
            result.push(child);
            result.extend(child.all_children());
        }
        result
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Equipment{{\"{}\"", self.name)?;
        if self.quantity > 1 {
            write!(f, " (x{})", self.quantity)?;
        }
        let weight = self.total_weight();
        if weight > 0.0 {
            write!(f, " {weight}lbs")?;
        }
        let cost = self.total_cost();
        if cost > 0.0 {
            write!(f, " ${cost}")?;
        }
        if !self.children.is_empty() {
            write!(f, " +{} items", self.children.len())?;
        }
        write!(f, "}}")
    }
}
