//! Configuration management for the validation policy.
//!
//! Configuration is plain YAML. Every section is optional and falls back to
//! the built-in rules, so an empty or missing file yields the default policy.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::PROJECT_CONFIG;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub name: NameRules,
    #[serde(default)]
    pub email: EmailRules,
    #[serde(default)]
    pub password: PasswordRules,
    #[serde(default)]
    pub phone: PhoneRules,
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (`<config dir>/regform/config.yaml`)
    /// 2. Project config (`.regform/config.yaml`)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(PROJECT_CONFIG))
    }

    /// Load the global config merged with an explicit project config path.
    /// Unlike [`Config::load`], the explicit file must exist.
    pub fn load_with(project_path: &Path) -> Result<Self> {
        if !project_path.exists() {
            anyhow::bail!("Config file not found: {}", project_path.display());
        }
        Self::load_merged_from(global_config_path().as_deref(), project_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.name.validate()?;
        self.email.validate()?;
        self.password.validate()?;
        self.phone.validate()?;
        self.messages.validate()
    }

    /// Load merged configuration from specified global and project config paths.
    /// Either file may be absent; project values override global values.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;

        debug!(
            "loaded config (global: {:?}, project: {})",
            global_path,
            project_path.display()
        );

        Ok(config)
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

/// Returns the path to the global config file, e.g. `~/.config/regform/config.yaml`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("regform").join("config.yaml"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub name: Option<NameRules>,
    pub email: Option<EmailRules>,
    pub password: Option<PartialPasswordRules>,
    pub phone: Option<PhoneRules>,
    pub messages: Option<PartialMessages>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialPasswordRules {
    pub min_length: Option<usize>,
    pub symbols: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialMessages {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub terms: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_password = self.password.unwrap_or_default();
        let project_password = project.password.unwrap_or_default();
        let global_messages = self.messages.unwrap_or_default();
        let project_messages = project.messages.unwrap_or_default();

        Config {
            // Single-value sections: project overrides global, or use default
            name: project.name.or(self.name).unwrap_or_default(),
            email: project.email.or(self.email).unwrap_or_default(),
            phone: project.phone.or(self.phone).unwrap_or_default(),
            password: PasswordRules {
                // Project value > global value > default
                min_length: project_password
                    .min_length
                    .or(global_password.min_length)
                    .unwrap_or_else(defaults::default_password_min_length),
                symbols: project_password
                    .symbols
                    .or(global_password.symbols)
                    .unwrap_or_else(defaults::default_password_symbols),
            },
            messages: Messages {
                full_name: project_messages
                    .full_name
                    .or(global_messages.full_name)
                    .unwrap_or_else(defaults::default_full_name_message),
                email: project_messages
                    .email
                    .or(global_messages.email)
                    .unwrap_or_else(defaults::default_email_message),
                password: project_messages
                    .password
                    .or(global_messages.password)
                    .unwrap_or_else(defaults::default_password_message),
                confirm_password: project_messages
                    .confirm_password
                    .or(global_messages.confirm_password)
                    .unwrap_or_else(defaults::default_confirm_password_message),
                phone: project_messages
                    .phone
                    .or(global_messages.phone)
                    .unwrap_or_else(defaults::default_phone_message),
                gender: project_messages
                    .gender
                    .or(global_messages.gender)
                    .unwrap_or_else(defaults::default_gender_message),
                terms: project_messages
                    .terms
                    .or(global_messages.terms)
                    .unwrap_or_else(defaults::default_terms_message),
            },
        }
    }
}
