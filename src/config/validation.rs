//! Validation logic for policy configuration.

use anyhow::Result;

use super::defaults::{EmailRules, Messages, NameRules, PasswordRules, PhoneRules};
use crate::form::Field;

impl NameRules {
    /// Validate name rules
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            anyhow::bail!("name.min_length must be greater than 0");
        }

        Ok(())
    }
}

impl EmailRules {
    /// Validate email rules
    pub fn validate(&self) -> Result<()> {
        if self.pattern.trim().is_empty() {
            anyhow::bail!("email.pattern must not be empty");
        }

        Ok(())
    }
}

impl PhoneRules {
    /// Validate phone rules
    pub fn validate(&self) -> Result<()> {
        if self.pattern.trim().is_empty() {
            anyhow::bail!("phone.pattern must not be empty");
        }

        Ok(())
    }
}

impl PasswordRules {
    /// Validate password rules
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            anyhow::bail!("password.min_length must be greater than 0");
        }

        if self.symbols.is_empty() {
            anyhow::bail!("password.symbols must contain at least one character");
        }

        if let Some(c) = self.symbols.chars().find(|c| c.is_alphanumeric()) {
            anyhow::bail!(
                "password.symbols must not contain letters or digits, got '{}'",
                c
            );
        }

        Ok(())
    }
}

impl Messages {
    /// Validate messages: a failing field must always have visible error text
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                anyhow::bail!("messages for '{}' must not be empty", field);
            }
        }

        Ok(())
    }
}
