//! Submission flow state machine.
//!
//! ```text
//! Idle -> Validating -> Rejected -> Idle
//!                    -> Accepted -> (dismiss) -> Idle
//! ```
//!
//! A [`FormSession`] owns the form state and everything derived from it: the
//! latest validation report, the strength meter and the confirmation panel.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::form::{FormFields, Gender};
use crate::policy::{FieldPolicy, RulePolicy};
use crate::strength::StrengthMeter;
use crate::validation::{validate, ValidationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    Rejected,
    Accepted,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Rejected => "rejected",
            SubmissionState::Accepted => "accepted",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    InvalidTransition {
        from: SubmissionState,
        to: SubmissionState,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::InvalidTransition { from, to } => {
                write!(f, "Invalid transition from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for TransitionError {}

/// Check if a transition between two states is valid.
pub fn is_valid_transition(from: &SubmissionState, to: &SubmissionState) -> bool {
    use SubmissionState::*;

    matches!(
        (from, to),
        (Idle, Validating)
            | (Validating, Rejected)
            | (Validating, Accepted)
            | (Rejected, Idle)
            | (Accepted, Idle)
    )
}

/// Read-only summary shown in the confirmation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl SubmissionSummary {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            full_name: fields.full_name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
        }
    }
}

impl fmt::Display for SubmissionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.full_name)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Phone: {}", self.phone)
    }
}

/// What a submit attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Rejected(ValidationReport),
    Accepted(SubmissionSummary),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}

pub struct FormSession<P: FieldPolicy = RulePolicy> {
    fields: FormFields,
    policy: P,
    state: SubmissionState,
    report: Option<ValidationReport>,
    strength: StrengthMeter,
    panel: Option<SubmissionSummary>,
}

impl Default for FormSession<RulePolicy> {
    fn default() -> Self {
        Self::new(RulePolicy::default())
    }
}

impl<P: FieldPolicy> FormSession<P> {
    pub fn new(policy: P) -> Self {
        Self {
            fields: FormFields::default(),
            policy,
            state: SubmissionState::Idle,
            report: None,
            strength: StrengthMeter::default(),
            panel: None,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Report from the most recent submit, cleared on dismiss.
    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    pub fn strength(&self) -> &StrengthMeter {
        &self.strength
    }

    /// Confirmation panel contents, present only while visible.
    pub fn panel(&self) -> Option<&SubmissionSummary> {
        self.panel.as_ref()
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_some()
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.fields.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
    }

    /// Set the password and recompute the strength meter.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.fields.password = value.into();
        self.strength
            .update(&self.fields.password, self.policy.password_rules());
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.fields.confirm_password = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.fields.phone = value.into();
    }

    pub fn set_gender(&mut self, value: Option<Gender>) {
        self.fields.gender = value;
    }

    pub fn set_terms_accepted(&mut self, value: bool) {
        self.fields.terms_accepted = value;
    }

    /// Replace every field at once, as when a whole form is loaded.
    /// Counts as a password change for the strength meter.
    pub fn load_fields(&mut self, fields: FormFields) {
        let password = fields.password.clone();
        self.fields = fields;
        self.set_password(password);
    }

    /// Validate the current fields.
    ///
    /// On success the confirmation panel becomes visible and the session stays
    /// in `Accepted` until [`FormSession::dismiss`]. On failure the session is
    /// back in `Idle` with the report available for display.
    pub fn submit(&mut self) -> Result<SubmissionOutcome, TransitionError> {
        self.transition(SubmissionState::Validating)?;

        let report = validate(&self.fields, &self.policy);
        let outcome = if report.is_valid() {
            let summary = SubmissionSummary::from_fields(&self.fields);
            self.transition(SubmissionState::Accepted)?;
            self.panel = Some(summary.clone());
            SubmissionOutcome::Accepted(summary)
        } else {
            self.transition(SubmissionState::Rejected)?;
            self.transition(SubmissionState::Idle)?;
            SubmissionOutcome::Rejected(report.clone())
        };

        self.report = Some(report);
        Ok(outcome)
    }

    /// Close the confirmation panel and reset the form.
    pub fn dismiss(&mut self) -> Result<(), TransitionError> {
        if self.state != SubmissionState::Accepted {
            return Err(TransitionError::InvalidTransition {
                from: self.state,
                to: SubmissionState::Idle,
            });
        }

        self.transition(SubmissionState::Idle)?;
        self.fields.reset();
        self.strength.clear();
        self.report = None;
        self.panel = None;
        Ok(())
    }

    fn transition(&mut self, to: SubmissionState) -> Result<(), TransitionError> {
        if !is_valid_transition(&self.state, &to) {
            return Err(TransitionError::InvalidTransition {
                from: self.state,
                to,
            });
        }

        debug!("submission state {} -> {}", self.state, to);
        self.state = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use SubmissionState::*;

        assert!(is_valid_transition(&Idle, &Validating));
        assert!(is_valid_transition(&Validating, &Accepted));
        assert!(is_valid_transition(&Validating, &Rejected));
        assert!(is_valid_transition(&Rejected, &Idle));
        assert!(is_valid_transition(&Accepted, &Idle));

        assert!(!is_valid_transition(&Idle, &Accepted));
        assert!(!is_valid_transition(&Accepted, &Validating));
        assert!(!is_valid_transition(&Rejected, &Accepted));
        assert!(!is_valid_transition(&Idle, &Idle));
    }

    #[test]
    fn test_summary_display() {
        let summary = SubmissionSummary {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "1234567890".to_string(),
        };
        assert_eq!(
            summary.to_string(),
            "Name: Ada\nEmail: ada@example.com\nPhone: 1234567890"
        );
    }

    #[test]
    fn test_error_display() {
        let err = TransitionError::InvalidTransition {
            from: SubmissionState::Idle,
            to: SubmissionState::Accepted,
        };
        assert_eq!(err.to_string(), "Invalid transition from idle to accepted");
    }

    #[test]
    fn test_set_password_updates_strength() {
        let mut session: FormSession = FormSession::default();
        assert_eq!(session.strength().label(), "");

        session.set_password("abcdefgh");
        assert_eq!(session.strength().label(), "Weak");

        session.set_password("Abcdefg1!");
        assert_eq!(session.strength().label(), "Strong");
    }

    #[test]
    fn test_other_setters_leave_strength_alone() {
        let mut session: FormSession = FormSession::default();
        session.set_confirm_password("Abcdefg1!");
        session.set_full_name("Ada");
        assert_eq!(session.strength().level(), None);
    }

    #[test]
    fn test_rejected_submit_returns_to_idle() {
        let mut session: FormSession = FormSession::default();
        let outcome = session.submit().unwrap();

        assert!(!outcome.is_accepted());
        assert_eq!(session.state(), SubmissionState::Idle);
        assert!(!session.is_panel_visible());
        assert!(session.report().is_some_and(|r| !r.is_valid()));
    }

    #[test]
    fn test_dismiss_from_idle_is_rejected() {
        let mut session: FormSession = FormSession::default();
        let err = session.dismiss().unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                from: SubmissionState::Idle,
                to: SubmissionState::Idle,
            }
        );
    }
}
