//! # regform - Registration form validation
//!
//! regform checks a registration form (full name, email, password, confirm
//! password, phone, gender, terms), scores password strength, and drives the
//! submit / confirm / dismiss flow of the form.
//!
//! ## Overview
//!
//! The library holds no rendering state. [`form::FormFields`] is passed into
//! pure validator functions, and the presentation layer (the `regform` CLI)
//! renders whatever the validator and [`session::FormSession`] report.
//!
//! ## Modules
//!
//! - [`form`] - Form fields, field names and gender options
//! - [`policy`] - Per-field predicate rules behind the [`policy::FieldPolicy`] trait
//! - [`validation`] - Whole-form validation and the resulting report
//! - [`strength`] - Password strength score and level
//! - [`session`] - Submission state machine and confirmation panel
//! - [`config`] - YAML configuration for the rule set
//! - [`ui`] - Terminal colors, icons and formatting helpers
//!
//! ## Example
//!
//! ```
//! use regform::form::Gender;
//! use regform::session::{FormSession, SubmissionOutcome};
//!
//! let mut session: FormSession = FormSession::default();
//! session.set_full_name("Ada Lovelace");
//! session.set_email("ada@example.com");
//! session.set_password("Analytical1!");
//! session.set_confirm_password("Analytical1!");
//! session.set_phone("1234567890");
//! session.set_gender(Some(Gender::Female));
//! session.set_terms_accepted(true);
//!
//! assert_eq!(session.strength().label(), "Strong");
//!
//! match session.submit().expect("session is idle") {
//!     SubmissionOutcome::Accepted(summary) => println!("{}", summary),
//!     SubmissionOutcome::Rejected(report) => println!("{:?}", report.errors()),
//! }
//! ```

pub mod config;
pub mod form;
pub mod policy;
pub mod session;
pub mod strength;
pub mod ui;
pub mod validation;

/// Default path constants.
pub mod paths {
    /// Project-level configuration file: `.regform/config.yaml`
    pub const PROJECT_CONFIG: &str = ".regform/config.yaml";
}
