//! Registration form data model.
//!
//! [`FormFields`] is the explicit form state passed into the validator. It
//! carries no rendering concerns; the presentation layer reads it and writes
//! user edits back through [`crate::session::FormSession`].

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven fields of the registration form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Gender,
    Terms,
}

impl Field {
    /// All fields in the order they appear on the form.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Phone,
        Field::Gender,
        Field::Terms,
    ];

    /// Wire name used in JSON/YAML input and report output.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Terms => "terms",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Phone => "Phone",
            Field::Gender => "Gender",
            Field::Terms => "Terms",
        }
    }

    /// Text-style inputs carry an error marker; the gender radio group and
    /// the terms checkbox only have an error slot.
    pub fn is_text_input(&self) -> bool {
        !matches!(self, Field::Gender | Field::Terms)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Radio options for the gender field.
///
/// Form files and the `--gender` flag share the same [`FromStr`] parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            other => anyhow::bail!("Unknown gender '{}'. Use male, female or other.", other),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Current values of every form input.
///
/// Missing keys deserialize to the empty/unselected/unchecked state, which
/// simply fails the corresponding predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(alias = "terms")]
    pub terms_accepted: bool,
}

impl FormFields {
    /// Clear every field back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been entered, selected or checked.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Current value of a text-style input, `None` for gender and terms.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::Phone => Some(&self.phone),
            Field::Gender | Field::Terms => None,
        }
    }
}
