//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::form::Field;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_name_min_length, usize, 2);
default_fn!(
    default_email_pattern,
    String,
    r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string()
);
default_fn!(default_phone_pattern, String, r"^[0-9]{10}$".to_string());
default_fn!(default_password_min_length, usize, 8);
default_fn!(default_password_symbols, String, "!@#$%^&*".to_string());

default_fn!(default_full_name_message, String, "Enter full name".to_string());
default_fn!(default_email_message, String, "Invalid email".to_string());
default_fn!(default_password_message, String, "Weak password".to_string());
default_fn!(
    default_confirm_password_message,
    String,
    "Passwords do not match".to_string()
);
default_fn!(default_phone_message, String, "10 digit number".to_string());
default_fn!(default_gender_message, String, "Select gender".to_string());
default_fn!(default_terms_message, String, "Accept terms".to_string());

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Full name rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NameRules {
    /// Minimum length of the trimmed name, in characters (default: 2)
    #[serde(default = "default_name_min_length")]
    pub min_length: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: default_name_min_length(),
        }
    }
}

/// Email rule: the whole value must match `pattern`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmailRules {
    #[serde(default = "default_email_pattern")]
    pub pattern: String,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self {
            pattern: default_email_pattern(),
        }
    }
}

/// Phone rule. Formatting characters are rejected by the default pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhoneRules {
    #[serde(default = "default_phone_pattern")]
    pub pattern: String,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            pattern: default_phone_pattern(),
        }
    }
}

/// Password rules shared by the password predicate and the strength meter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordRules {
    /// Minimum length in characters (default: 8)
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,
    /// Characters that count as symbols (default: `!@#$%^&*`)
    #[serde(default = "default_password_symbols")]
    pub symbols: String,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
            symbols: default_password_symbols(),
        }
    }
}

impl PasswordRules {
    pub fn long_enough(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }

    pub fn has_digit(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_digit())
    }

    pub fn has_symbol(&self, password: &str) -> bool {
        password.chars().any(|c| self.symbols.contains(c))
    }

    pub fn has_uppercase(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_uppercase())
    }

    pub fn has_lowercase(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_lowercase())
    }

    /// Acceptance rule for the password field: long enough, with a digit
    /// and a symbol. Letter case only affects the strength score.
    pub fn accepts(&self, password: &str) -> bool {
        self.long_enough(password) && self.has_digit(password) && self.has_symbol(password)
    }
}

/// Error text written into each field's slot when its predicate fails
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Messages {
    #[serde(default = "default_full_name_message")]
    pub full_name: String,
    #[serde(default = "default_email_message")]
    pub email: String,
    #[serde(default = "default_password_message")]
    pub password: String,
    #[serde(default = "default_confirm_password_message")]
    pub confirm_password: String,
    #[serde(default = "default_phone_message")]
    pub phone: String,
    #[serde(default = "default_gender_message")]
    pub gender: String,
    #[serde(default = "default_terms_message")]
    pub terms: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            full_name: default_full_name_message(),
            email: default_email_message(),
            password: default_password_message(),
            confirm_password: default_confirm_password_message(),
            phone: default_phone_message(),
            gender: default_gender_message(),
            terms: default_terms_message(),
        }
    }
}

impl Messages {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Phone => &self.phone,
            Field::Gender => &self.gender,
            Field::Terms => &self.terms,
        }
    }
}
