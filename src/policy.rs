//! Field predicate rules.
//!
//! The validator and the submission flow only talk to [`FieldPolicy`], so the
//! rules themselves can be swapped without touching either.

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::{Config, Messages, PasswordRules};
use crate::form::{Field, FormFields};

/// A set of per-field predicates plus the error text for each field.
pub trait FieldPolicy {
    /// Returns true when `field` passes its predicate for the given form.
    fn check(&self, field: Field, form: &FormFields) -> bool;

    /// Error text shown in the field's slot when the predicate fails.
    fn message(&self, field: Field) -> &str;

    /// Password rules, shared with the strength meter.
    fn password_rules(&self) -> &PasswordRules;
}

/// Default policy compiled from [`Config`].
#[derive(Debug, Clone)]
pub struct RulePolicy {
    name_min_length: usize,
    email: Regex,
    phone: Regex,
    password: PasswordRules,
    messages: Messages,
}

impl RulePolicy {
    /// Compile the rules in `config`. Fails if a pattern is not a valid regex.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let email = Regex::new(&config.email.pattern)
            .with_context(|| format!("Invalid email pattern: {}", config.email.pattern))?;
        let phone = Regex::new(&config.phone.pattern)
            .with_context(|| format!("Invalid phone pattern: {}", config.phone.pattern))?;

        Ok(Self {
            name_min_length: config.name.min_length,
            email,
            phone,
            password: config.password.clone(),
            messages: config.messages.clone(),
        })
    }
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self::from_config(&Config::default()).expect("built-in patterns compile")
    }
}

impl FieldPolicy for RulePolicy {
    fn check(&self, field: Field, form: &FormFields) -> bool {
        match field {
            Field::FullName => form.full_name.trim().chars().count() >= self.name_min_length,
            Field::Email => self.email.is_match(&form.email),
            Field::Password => self.password.accepts(&form.password),
            Field::ConfirmPassword => form.confirm_password == form.password,
            Field::Phone => self.phone.is_match(&form.phone),
            Field::Gender => form.gender.is_some(),
            Field::Terms => form.terms_accepted,
        }
    }

    fn message(&self, field: Field) -> &str {
        self.messages.get(field)
    }

    fn password_rules(&self) -> &PasswordRules {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(f: impl FnOnce(&mut FormFields)) -> FormFields {
        let mut form = FormFields::default();
        f(&mut form);
        form
    }

    #[test]
    fn test_full_name_is_trimmed() {
        let policy = RulePolicy::default();
        assert!(policy.check(Field::FullName, &form_with(|f| f.full_name = "Al".into())));
        assert!(!policy.check(Field::FullName, &form_with(|f| f.full_name = " A ".into())));
        assert!(!policy.check(Field::FullName, &form_with(|f| f.full_name = "    ".into())));
    }

    #[test]
    fn test_full_name_counts_characters() {
        let policy = RulePolicy::default();
        assert!(policy.check(Field::FullName, &form_with(|f| f.full_name = "Zoë".into())));
        assert!(!policy.check(Field::FullName, &form_with(|f| f.full_name = "é".into())));
    }

    #[test]
    fn test_email_pattern() {
        let policy = RulePolicy::default();
        let check = |email: &str| {
            policy.check(Field::Email, &form_with(|f| f.email = email.to_string()))
        };
        assert!(check("a@b.co"));
        assert!(check("first.last@sub.example.org"));
        assert!(!check("a@b"));
        assert!(!check("a.com"));
        assert!(!check("a @b.com"));
        assert!(!check("a@@b.com"));
        assert!(!check(""));
    }

    #[test]
    fn test_phone_is_strict() {
        let policy = RulePolicy::default();
        let check = |phone: &str| {
            policy.check(Field::Phone, &form_with(|f| f.phone = phone.to_string()))
        };
        assert!(check("1234567890"));
        assert!(!check("123456789"));
        assert!(!check("12345678901"));
        assert!(!check("123-456-7890"));
        assert!(!check("123 456 7890"));
        assert!(!check("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_confirm_password_is_exact() {
        let policy = RulePolicy::default();
        let same = form_with(|f| {
            f.password = "anything".into();
            f.confirm_password = "anything".into();
        });
        let case = form_with(|f| {
            f.password = "Secret1!".into();
            f.confirm_password = "secret1!".into();
        });
        assert!(policy.check(Field::ConfirmPassword, &same));
        assert!(!policy.check(Field::ConfirmPassword, &case));
        assert!(policy.check(Field::ConfirmPassword, &FormFields::default()));
    }

    #[test]
    fn test_custom_phone_pattern() {
        let mut config = Config::default();
        config.phone.pattern = r"^\d{3}-\d{3}-\d{4}$".to_string();
        let policy = RulePolicy::from_config(&config).unwrap();

        assert!(policy.check(Field::Phone, &form_with(|f| f.phone = "123-456-7890".into())));
        assert!(!policy.check(Field::Phone, &form_with(|f| f.phone = "1234567890".into())));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let mut config = Config::default();
        config.email.pattern = "([unclosed".to_string();
        let err = RulePolicy::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid email pattern"));
    }

    #[test]
    fn test_custom_message() {
        let mut config = Config::default();
        config.messages.gender = "Pick one".to_string();
        let policy = RulePolicy::from_config(&config).unwrap();
        assert_eq!(policy.message(Field::Gender), "Pick one");
        assert_eq!(policy.message(Field::Terms), "Accept terms");
    }
}
