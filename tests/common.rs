//! Common test helpers for integration tests

#![allow(dead_code)]

use regform::form::{Field, FormFields, Gender};
use regform::session::FormSession;

/// Builder for form values, starting from a form that passes every rule.
pub struct FormBuilder {
    fields: FormFields,
}

impl FormBuilder {
    pub fn valid() -> Self {
        Self {
            fields: FormFields {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "abcdefg1!".to_string(),
                confirm_password: "abcdefg1!".to_string(),
                phone: "1234567890".to_string(),
                gender: Some(Gender::Female),
                terms_accepted: true,
            },
        }
    }

    pub fn full_name(mut self, value: &str) -> Self {
        self.fields.full_name = value.to_string();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.fields.email = value.to_string();
        self
    }

    /// Set both password and confirmation.
    pub fn password(mut self, value: &str) -> Self {
        self.fields.password = value.to_string();
        self.fields.confirm_password = value.to_string();
        self
    }

    pub fn confirm_password(mut self, value: &str) -> Self {
        self.fields.confirm_password = value.to_string();
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.fields.phone = value.to_string();
        self
    }

    pub fn gender(mut self, value: Option<Gender>) -> Self {
        self.fields.gender = value;
        self
    }

    pub fn terms(mut self, value: bool) -> Self {
        self.fields.terms_accepted = value;
        self
    }

    /// Break exactly one field so that only its predicate fails.
    pub fn breaking(self, field: Field) -> Self {
        match field {
            Field::FullName => self.full_name(" A "),
            Field::Email => self.email("ada@example"),
            Field::Password => self.password("abcdefgh"),
            Field::ConfirmPassword => self.confirm_password("ABCDEFG1!"),
            Field::Phone => self.phone("123-456-7890"),
            Field::Gender => self.gender(None),
            Field::Terms => self.terms(false),
        }
    }

    pub fn build(self) -> FormFields {
        self.fields
    }
}

/// A session with every field entered through the setters.
pub fn session_with(fields: FormFields) -> FormSession {
    let mut session: FormSession = FormSession::default();
    session.set_full_name(fields.full_name);
    session.set_email(fields.email);
    session.set_password(fields.password);
    session.set_confirm_password(fields.confirm_password);
    session.set_phone(fields.phone);
    session.set_gender(fields.gender);
    session.set_terms_accepted(fields.terms_accepted);
    session
}
