//! Password strength scoring.
//!
//! The score counts how many of five independent conditions hold: minimum
//! length, a digit, a symbol, an uppercase letter and a lowercase letter.

use log::trace;
use serde::Serialize;
use std::fmt;

use crate::config::PasswordRules;

/// Highest possible strength score
pub const MAX_SCORE: u8 = 5;

/// Count the satisfied complexity conditions (0..=5).
pub fn score(password: &str, rules: &PasswordRules) -> u8 {
    [
        rules.long_enough(password),
        rules.has_digit(password),
        rules.has_symbol(password),
        rules.has_uppercase(password),
        rules.has_lowercase(password),
    ]
    .iter()
    .filter(|&&held| held)
    .count() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Score ≤ 2 is weak, 3–4 medium, 5 strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Indicator category class.
    pub fn class_name(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// State of the strength indicator: empty until the password first changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StrengthMeter {
    level: Option<StrengthLevel>,
    score: u8,
}

impl StrengthMeter {
    /// A meter already showing the strength of `password`.
    pub fn evaluate(password: &str, rules: &PasswordRules) -> Self {
        let mut meter = Self::default();
        meter.update(password, rules);
        meter
    }

    /// Recompute from the current password. Called on every change.
    pub fn update(&mut self, password: &str, rules: &PasswordRules) -> StrengthLevel {
        let score = score(password, rules);
        let level = StrengthLevel::from_score(score);
        trace!("strength score {} -> {}", score, level);
        self.score = score;
        self.level = Some(level);
        level
    }

    /// Reset label and category to empty.
    pub fn clear(&mut self) {
        self.level = None;
        self.score = 0;
    }

    pub fn level(&self) -> Option<StrengthLevel> {
        self.level
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Label text, empty when cleared.
    pub fn label(&self) -> &'static str {
        self.level.map(|l| l.label()).unwrap_or("")
    }

    pub fn class_name(&self) -> Option<&'static str> {
        self.level.map(|l| l.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PasswordRules {
        PasswordRules::default()
    }

    #[test]
    fn test_score_examples() {
        assert_eq!(score("abcdefgh", &rules()), 2);
        assert_eq!(score("Abcdefg1", &rules()), 4);
        assert_eq!(score("Abcdefg1!", &rules()), 5);
        assert_eq!(score("", &rules()), 0);
        assert_eq!(score("!!!!", &rules()), 1);
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Strong);
    }

    #[test]
    fn test_labels_and_classes() {
        assert_eq!(StrengthLevel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLevel::Medium.class_name(), "medium");
        assert_eq!(StrengthLevel::Strong.label(), "Strong");
    }

    #[test]
    fn test_meter_update_and_clear() {
        let mut meter = StrengthMeter::default();
        assert_eq!(meter.label(), "");
        assert_eq!(meter.class_name(), None);

        assert_eq!(meter.update("Abcdefg1", &rules()), StrengthLevel::Medium);
        assert_eq!(meter.score(), 4);
        assert_eq!(meter.label(), "Medium");
        assert_eq!(meter.class_name(), Some("medium"));

        meter.update("Abcdefg1!", &rules());
        assert_eq!(meter.level(), Some(StrengthLevel::Strong));

        meter.clear();
        assert_eq!(meter, StrengthMeter::default());
        assert_eq!(meter.label(), "");
    }

    #[test]
    fn test_empty_password_still_shows_weak() {
        let meter = StrengthMeter::evaluate("", &rules());
        assert_eq!(meter.level(), Some(StrengthLevel::Weak));
        assert_eq!(meter.score(), 0);
    }

    #[test]
    fn test_custom_rules_affect_score() {
        let custom = PasswordRules {
            min_length: 4,
            symbols: "?".to_string(),
        };
        assert_eq!(score("ab1?", &custom), 4);
        assert_eq!(score("ab1!", &custom), 3);
    }
}
