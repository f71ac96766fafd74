//! Whole-form validation.
//!
//! Every predicate runs on every attempt. Failing fields are collected in
//! form order and the form is valid only when that list is empty.

use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::form::{Field, FormFields};
use crate::policy::FieldPolicy;

/// Error text per failing field. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Result of one validation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    valid: bool,
    errors: FieldErrors,
    failing: Vec<Field>,
    markers: Vec<Field>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Failing fields in form order
    pub fn failing_fields(&self) -> &[Field] {
        &self.failing
    }

    /// Whether the field's input should carry the error marker.
    /// Only text-style inputs have one.
    pub fn has_marker(&self, field: Field) -> bool {
        self.markers.contains(&field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Content of the field's error slot: the message, or empty when valid.
    pub fn slot(&self, field: Field) -> &str {
        self.errors.get(field).unwrap_or("")
    }
}

/// Run every field predicate against `form`.
pub fn validate<P: FieldPolicy + ?Sized>(form: &FormFields, policy: &P) -> ValidationReport {
    let mut errors = FieldErrors::default();
    let mut failing = Vec::new();

    for field in Field::ALL {
        let passed = policy.check(field, form);
        trace!("field {} {}", field, if passed { "passed" } else { "failed" });
        if !passed {
            errors.insert(field, policy.message(field));
            failing.push(field);
        }
    }

    let markers = failing
        .iter()
        .copied()
        .filter(Field::is_text_input)
        .collect();
    let valid = failing.is_empty();

    debug!(
        "validated form: {} ({} failing)",
        if valid { "valid" } else { "invalid" },
        failing.len()
    );

    ValidationReport {
        valid,
        errors,
        failing,
        markers,
    }
}
