//! Loading worksheet settings from JSON.
//!
//! Every field except `operation` is optional; missing fields take the same
//! defaults as [`WorksheetSettings::new`]. Loaded settings are validated
//! before they are returned.

use tracing::debug;

use crate::error::{DrillError, Result};
use crate::worksheet::models::{NumberRange, WorksheetSettings};

impl WorksheetSettings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: WorksheetSettings = serde_json::from_str(json)?;
        settings.validate()?;
        debug!(
            operation = %settings.operation,
            difficulty = %settings.difficulty,
            problems = settings.problems_per_page,
            "loaded worksheet settings"
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the generator cannot honour.
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = self.number_range {
            if !range.is_valid() {
                return Err(DrillError::InvalidRange { min: range.min, max: range.max });
            }
            if !range.is_bounded() {
                return Err(DrillError::RangeOutOfBounds {
                    min: range.min,
                    max: range.max,
                    limit: NumberRange::LIMIT,
                });
            }
        }
        if let Some(&table) = self.multiplication_tables.iter().find(|t| !(1..=10).contains(*t)) {
            return Err(DrillError::InvalidTable(table));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::models::{AdditionSubtype, Difficulty, NumberRange, Operation};

    #[test]
    fn minimal_json_takes_defaults() {
        let s = WorksheetSettings::from_json(r#"{ "operation": "subtraction" }"#).unwrap();
        assert_eq!(s.operation, Operation::Subtraction);
        assert_eq!(s.difficulty, Difficulty::Easy);
        assert_eq!(s.problems_per_page, 12);
        assert_eq!(s.effective_range(), NumberRange::new(1, 10));
        assert!(s.rng_seed.is_none());
    }

    #[test]
    fn full_json_round_trips_subtypes_and_flags() {
        let json = r#"{
            "operation": "addition",
            "operations": ["addition", "multiplication"],
            "operation_subtypes": { "addition": ["ZE+ZE", "Z+E"] },
            "difficulty": "hard",
            "number_range": { "min": 5, "max": 50 },
            "problems_per_page": 20,
            "multiplication_tables": [3, 5, 7],
            "carry_over": true,
            "suppress_trivial": true,
            "avoid_duplicates": true,
            "placeholders": true,
            "rng_seed": 99
        }"#;
        let s = WorksheetSettings::from_json(json).unwrap();
        assert!(s.is_mixed());
        assert_eq!(
            s.operation_subtypes.addition,
            vec![AdditionSubtype::TwoDigitTwoDigit, AdditionSubtype::TensOnes]
        );
        assert_eq!(s.effective_range(), NumberRange::new(5, 50));
        assert_eq!(s.rng_seed, Some(99));

        let again = WorksheetSettings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(again, s);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = WorksheetSettings::from_json(
            r#"{ "operation": "addition", "number_range": { "min": 9, "max": 2 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DrillError::InvalidRange { min: 9, max: 2 }));
    }

    #[test]
    fn oversized_range_is_rejected() {
        let err = WorksheetSettings::from_json(
            r#"{ "operation": "division", "number_range": { "min": 1, "max": 4611686018427387903 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DrillError::RangeOutOfBounds { min: 1, max: 4_611_686_018_427_387_903, limit: NumberRange::LIMIT }
        ));
    }

    #[test]
    fn out_of_range_table_is_rejected() {
        let err = WorksheetSettings::from_json(
            r#"{ "operation": "multiplication", "multiplication_tables": [2, 12] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DrillError::InvalidTable(12)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = WorksheetSettings::from_json(r#"{ "operation": "modulo" }"#).unwrap_err();
        assert!(matches!(err, DrillError::Json(_)));
    }
}
