//! Interactive form filling

use anyhow::Result;
use dialoguer::{Confirm, Input, Password, Select};
use log::debug;

use regform::config::Config;
use regform::form::{Field, Gender};
use regform::policy::{FieldPolicy, RulePolicy};
use regform::session::{FormSession, SubmissionOutcome};

use super::ui::render;
use super::ui::Output;

/// Fields to ask again after a rejected submit. A re-entered password
/// always needs its confirmation re-entered too.
pub fn fields_to_revisit(failing: &[Field]) -> Vec<Field> {
    let mut fields = failing.to_vec();
    if fields.contains(&Field::Password) && !fields.contains(&Field::ConfirmPassword) {
        fields.push(Field::ConfirmPassword);
        fields.sort();
    }
    fields
}

fn prompt_text(field: Field, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(field.label())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_secret(field: Field) -> Result<String> {
    let value = Password::new()
        .with_prompt(field.label())
        .allow_empty_password(true)
        .interact()?;
    Ok(value)
}

/// Ask for one field and write the answer into the session.
fn prompt_field<P: FieldPolicy>(
    session: &mut FormSession<P>,
    field: Field,
    output: &Output,
) -> Result<()> {
    match field {
        Field::FullName => {
            let value = prompt_text(field, &session.fields().full_name)?;
            session.set_full_name(value);
        }
        Field::Email => {
            let value = prompt_text(field, &session.fields().email)?;
            session.set_email(value);
        }
        Field::Password => {
            let value = prompt_secret(field)?;
            session.set_password(value);
            render::show_strength(output, session.strength());
        }
        Field::ConfirmPassword => {
            let value = prompt_secret(field)?;
            session.set_confirm_password(value);
        }
        Field::Phone => {
            let value = prompt_text(field, &session.fields().phone)?;
            session.set_phone(value);
        }
        Field::Gender => {
            let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
            let current = session
                .fields()
                .gender
                .and_then(|g| Gender::ALL.iter().position(|&o| o == g))
                .unwrap_or(0);
            let selection = Select::new()
                .with_prompt(field.label())
                .items(&labels)
                .default(current)
                .interact()?;
            session.set_gender(Some(Gender::ALL[selection]));
        }
        Field::Terms => {
            let accepted = Confirm::new()
                .with_prompt("Accept the terms and conditions")
                .default(session.fields().terms_accepted)
                .interact()?;
            session.set_terms_accepted(accepted);
        }
    }
    Ok(())
}

/// Run the interactive form until the user stops.
pub fn cmd_fill(config: &Config, output: &Output) -> Result<()> {
    let mut session = FormSession::new(RulePolicy::from_config(config)?);
    let mut pending = Field::ALL.to_vec();

    loop {
        for &field in &pending {
            prompt_field(&mut session, field, output)?;
        }

        match session.submit()? {
            SubmissionOutcome::Accepted(summary) => {
                render::show_panel(output, &summary);
                Input::<String>::new()
                    .with_prompt("Press Enter to close")
                    .allow_empty(true)
                    .interact_text()?;
                session.dismiss()?;
                debug!("confirmation dismissed, form reset");

                let again = Confirm::new()
                    .with_prompt("Register someone else?")
                    .default(false)
                    .interact()?;
                if !again {
                    return Ok(());
                }
                pending = Field::ALL.to_vec();
            }
            SubmissionOutcome::Rejected(report) => {
                render::show_report(output, session.fields(), &report);

                let retry = Confirm::new()
                    .with_prompt("Fix the highlighted fields and resubmit?")
                    .default(true)
                    .interact()?;
                if !retry {
                    output.warn("Registration abandoned");
                    return Ok(());
                }
                pending = fields_to_revisit(report.failing_fields());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revisit_adds_confirmation_after_password() {
        assert_eq!(
            fields_to_revisit(&[Field::Password, Field::Terms]),
            vec![Field::Password, Field::ConfirmPassword, Field::Terms]
        );
    }

    #[test]
    fn test_revisit_keeps_failing_fields() {
        assert_eq!(
            fields_to_revisit(&[Field::Email, Field::Phone]),
            vec![Field::Email, Field::Phone]
        );
        assert_eq!(
            fields_to_revisit(&[Field::Password, Field::ConfirmPassword]),
            vec![Field::Password, Field::ConfirmPassword]
        );
        assert!(fields_to_revisit(&[]).is_empty());
    }
}
