//! CharacterBasic - version, id, point total, and document timestamps.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::common::is_blank;
use crate::error::DomainError;

/// Raw values handed to [`CharacterBasic::new`]. Timestamps arrive as the
/// document's RFC 3339 strings and are validated during construction.
#[derive(Debug, Clone, Default)]
pub struct CharacterBasicInput {
    pub version: i64,
    pub id: String,
    pub total_points: f64,
    pub created_date: String,
    pub modified_date: String,
}

/// The minimal identity block of a character document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBasic {
    version: i64,
    id: String,
    total_points: f64,
    created_date: DateTime<FixedOffset>,
    modified_date: DateTime<FixedOffset>,
}

impl CharacterBasic {
    pub fn new(input: CharacterBasicInput) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        if input.version < 0 {
            errors.push(format!(
                "field version must be a non-negative number, got {}",
                input.version
            ));
        }
        if is_blank(&input.id) {
            errors.push("missing required field: id".to_string());
        }
        if !input.total_points.is_finite() || input.total_points < 0.0 {
            errors.push(format!(
                "field totalPoints must be a non-negative number, got {}",
                input.total_points
            ));
        }

        let created_date = Self::parse_timestamp(&input.created_date, "createdDate", &mut errors);
        let modified_date =
            Self::parse_timestamp(&input.modified_date, "modifiedDate", &mut errors);

        match (created_date, modified_date) {
            (Some(created_date), Some(modified_date)) if errors.is_empty() => Ok(Self {
                version: input.version,
                id: input.id.trim().to_string(),
                total_points: input.total_points,
                created_date,
                modified_date,
            }),
            _ => Err(DomainError::invalid(errors)),
        }
    }

    fn parse_timestamp(
        raw: &str,
        field: &str,
        errors: &mut Vec<String>,
    ) -> Option<DateTime<FixedOffset>> {
        if is_blank(raw) {
            errors.push(format!("missing required field: {field}"));
            return None;
        }
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(ts) => Some(ts),
            Err(_) => {
                errors.push(format!(
                    "field {field} must be an RFC 3339 timestamp, got {raw:?}"
                ));
                None
            }
        }
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    pub fn created_date(&self) -> DateTime<FixedOffset> {
        self.created_date
    }

    pub fn modified_date(&self) -> DateTime<FixedOffset> {
        self.modified_date
    }
}

impl std::fmt::Display for CharacterBasic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CharacterBasic{{v{} \"{}\" - {}pts}}",
            self.version, self.id, self.total_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CharacterBasicInput {
        CharacterBasicInput {
            version: 4,
            id: "ABC-123".to_string(),
            total_points: 150.0,
            created_date: "2023-06-15T10:30:00-03:00".to_string(),
            modified_date: "2023-06-20T08:00:00-03:00".to_string(),
        }
    }

    #[test]
    fn test_valid_basic() {
        let basic = CharacterBasic::new(valid_input()).expect("valid input");
        assert_eq!(basic.version(), 4);
        assert_eq!(basic.id(), "ABC-123");
        assert_eq!(basic.total_points(), 150.0);
        assert_eq!(basic.created_date().to_rfc3339(), "2023-06-15T10:30:00-03:00");
    }

    #[test]
    fn test_blank_id_rejected() {
        let input = CharacterBasicInput {
            id: "  ".to_string(),
            ..valid_input()
        };
        let err = CharacterBasic::new(input).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_negative_version_and_points_both_reported() {
        let input = CharacterBasicInput {
            version: -1,
            total_points: -10.0,
            ..valid_input()
        };
        let err = CharacterBasic::new(input).unwrap_err();
        let messages = err.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("version"));
        assert!(messages[1].contains("totalPoints"));
    }

    #[test]
    fn test_malformed_timestamp_rejected() {
        let input = CharacterBasicInput {
            modified_date: "20th of June".to_string(),
            ..valid_input()
        };
        let err = CharacterBasic::new(input).unwrap_err();
        assert!(err.to_string().contains("modifiedDate"));
    }

    #[test]
    fn test_display() {
        let basic = CharacterBasic::new(valid_input()).expect("valid input");
        assert_eq!(basic.to_string(), "CharacterBasic{v4 \"ABC-123\" - 150pts}");
    }
}
