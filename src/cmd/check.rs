//! Non-interactive form validation.

use anyhow::{Context, Result};
use log::debug;
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use regform::config::Config;
use regform::form::FormFields;
use regform::policy::RulePolicy;
use regform::session::{FormSession, SubmissionOutcome};

use super::ui::render;
use super::ui::{Output, OutputMode};
use crate::cli::FieldArgs;

/// Parse form values from JSON or YAML text.
pub fn parse_form(content: &str, json_hint: bool) -> Result<FormFields> {
    if content.trim().is_empty() {
        return Ok(FormFields::default());
    }

    if json_hint || content.trim_start().starts_with('{') {
        serde_json::from_str(content).context("Failed to parse form as JSON")
    } else {
        serde_yaml::from_str(content).context("Failed to parse form as YAML")
    }
}

/// Read form values from a file, or from stdin when the path is `-`.
pub fn read_form(path: &Path) -> Result<FormFields> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read form from stdin")?;
        return parse_form(&content, false);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form from {}", path.display()))?;
    let json_hint = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    parse_form(&content, json_hint).with_context(|| format!("Invalid form file {}", path.display()))
}

impl FieldArgs {
    /// Overlay command-line values onto `fields`.
    pub fn apply(&self, fields: &mut FormFields) -> Result<()> {
        if let Some(value) = &self.full_name {
            fields.full_name = value.clone();
        }
        if let Some(value) = &self.email {
            fields.email = value.clone();
        }
        if let Some(value) = &self.password {
            fields.password = value.clone();
        }
        if let Some(value) = &self.confirm_password {
            fields.confirm_password = value.clone();
        }
        if let Some(value) = &self.phone {
            fields.phone = value.clone();
        }
        if let Some(value) = &self.gender {
            fields.gender = Some(value.parse()?);
        }
        if let Some(accepted) = self.terms {
            fields.terms_accepted = accepted;
        }
        Ok(())
    }
}

/// Validate a form and render the outcome. Returns whether it was accepted.
pub fn cmd_check(
    config: &Config,
    file: Option<&Path>,
    args: &FieldArgs,
    output: &Output,
) -> Result<bool> {
    let mut fields = match file {
        Some(path) => read_form(path)?,
        None => FormFields::default(),
    };
    args.apply(&mut fields)?;
    if fields.is_blank() {
        output.warn("No form values given; every field is empty");
    }

    let mut session = FormSession::new(RulePolicy::from_config(config)?);
    session.load_fields(fields);

    let outcome = session.submit()?;
    debug!("check finished: accepted={}", outcome.is_accepted());

    match (&outcome, output.mode()) {
        (SubmissionOutcome::Accepted(summary), OutputMode::Json) => {
            output.json(&json!({
                "valid": true,
                "report": session.report(),
                "strength": session.strength(),
                "summary": summary,
            }));
        }
        (SubmissionOutcome::Rejected(report), OutputMode::Json) => {
            output.json(&json!({
                "valid": false,
                "report": report,
                "strength": session.strength(),
            }));
        }
        (SubmissionOutcome::Accepted(summary), _) => {
            if let Some(report) = session.report() {
                render::show_report(output, session.fields(), report);
            }
            render::show_strength(output, session.strength());
            render::show_panel(output, summary);
        }
        (SubmissionOutcome::Rejected(report), _) => {
            render::show_report(output, session.fields(), report);
            render::show_strength(output, session.strength());
        }
    }

    Ok(outcome.is_accepted())
}
