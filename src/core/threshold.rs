use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidatorError};

/// Decision thresholds for the validation pipeline.
///
/// The defaults are the tuned reference values; they are configuration, not a
/// law of the domain. Short answers (few characters) get a lower semantic bar
/// because token overlap is sparser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Fuzzy ratio accepted outright as a minor typo
    pub fuzzy_high: f64,
    /// Fuzzy ratio accepted for known technical terms
    pub fuzzy_good: f64,
    /// Lower fuzzy bound kept for tuning experiments
    pub fuzzy_acceptable: f64,
    pub semantic_high_short: f64,
    pub semantic_high_long: f64,
    pub semantic_low_short: f64,
    pub semantic_low_long: f64,
    pub combined_high_short: f64,
    pub combined_high_long: f64,
    pub combined_low_short: f64,
    pub combined_low_long: f64,
    /// Correct answers at most this many characters use the short branch
    pub short_answer_len: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            fuzzy_high: 0.97,
            fuzzy_good: 0.90,
            fuzzy_acceptable: 0.80,
            semantic_high_short: 0.60,
            semantic_high_long: 0.65,
            semantic_low_short: 0.30,
            semantic_low_long: 0.35,
            combined_high_short: 0.45,
            combined_high_long: 0.50,
            combined_low_short: 0.35,
            combined_low_long: 0.38,
            short_answer_len: 3,
        }
    }
}

impl ThresholdConfig {
    /// Load from a JSON deployment config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether a correct answer selects the short-answer threshold branch
    pub fn is_short(&self, correct_answer: &str) -> bool {
        correct_answer.chars().count() <= self.short_answer_len
    }

    pub fn semantic_high(&self, short: bool) -> f64 {
        if short {
            self.semantic_high_short
        } else {
            self.semantic_high_long
        }
    }

    pub fn semantic_low(&self, short: bool) -> f64 {
        if short {
            self.semantic_low_short
        } else {
            self.semantic_low_long
        }
    }

    pub fn combined_high(&self, short: bool) -> f64 {
        if short {
            self.combined_high_short
        } else {
            self.combined_high_long
        }
    }

    /// Check that every threshold is a valid probability and low/high pairs
    /// are ordered.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("fuzzy_high", self.fuzzy_high),
            ("fuzzy_good", self.fuzzy_good),
            ("fuzzy_acceptable", self.fuzzy_acceptable),
            ("semantic_high_short", self.semantic_high_short),
            ("semantic_high_long", self.semantic_high_long),
            ("semantic_low_short", self.semantic_low_short),
            ("semantic_low_long", self.semantic_low_long),
            ("combined_high_short", self.combined_high_short),
            ("combined_high_long", self.combined_high_long),
            ("combined_low_short", self.combined_low_short),
            ("combined_low_long", self.combined_low_long),
        ];

        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidatorError::Threshold {
                    name: name.to_string(),
                    value,
                });
            }
        }

        let pairs = [
            ("fuzzy_good", self.fuzzy_good, self.fuzzy_high),
            ("semantic_low_short", self.semantic_low_short, self.semantic_high_short),
            ("semantic_low_long", self.semantic_low_long, self.semantic_high_long),
            ("combined_low_short", self.combined_low_short, self.combined_high_short),
            ("combined_low_long", self.combined_low_long, self.combined_high_long),
        ];

        for (name, low, high) in pairs {
            if low > high {
                return Err(ValidatorError::Threshold {
                    name: name.to_string(),
                    value: low,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ThresholdConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fuzzy_high, 0.97);
        assert_eq!(config.combined_high_long, 0.50);
    }

    #[test]
    fn test_short_branch_boundary() {
        let config = ThresholdConfig::default();
        assert!(config.is_short("int"));
        assert!(!config.is_short("bool"));
        // character count, not byte count
        assert!(config.is_short("más"));
    }

    #[test]
    fn test_branch_selection() {
        let config = ThresholdConfig::default();
        assert_eq!(config.semantic_high(true), 0.60);
        assert_eq!(config.semantic_high(false), 0.65);
        assert_eq!(config.semantic_low(true), 0.30);
        assert_eq!(config.combined_high(false), 0.50);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let config = ThresholdConfig {
            fuzzy_high: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_pair() {
        let config = ThresholdConfig {
            semantic_low_long: 0.9,
            semantic_high_long: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ThresholdConfig::from_json(r#"{"fuzzy_high": 0.95}"#).unwrap();
        assert_eq!(config.fuzzy_high, 0.95);
        assert_eq!(config.fuzzy_good, 0.90);
        assert_eq!(config.short_answer_len, 3);
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(ThresholdConfig::from_json(r#"{"fuzzy_high": 2.0}"#).is_err());
        assert!(ThresholdConfig::from_json("not json").is_err());
    }
}
