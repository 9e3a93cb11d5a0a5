use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::form::{Field, FormFields};

/// Per-field problems. The Display text is what the user sees under the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    // lowercase on purpose, matches the copy that shipped
    #[error("message is required")]
    MessageRequired,
}

// Structural check only, unanchored like the browser `RegExp.test` it mirrors.
// JS `\s` also covers U+FEFF, which Rust's Unicode `\s` does not.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s\x{FEFF}]+@[^\s\x{FEFF}]+\.[^\s\x{FEFF}]+").expect("valid hardcoded regex")
});

/// Errors keyed by field; a missing key means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// The user-facing text for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::NameRequired)
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !EMAIL_RE.is_match(email) {
        Err(ValidationError::EmailInvalid)
    } else {
        Ok(())
    }
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.is_empty() {
        Err(ValidationError::MessageRequired)
    } else {
        Ok(())
    }
}

/// Checks every field independently and collects all failures.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let checks = [
        (Field::Name, validate_name(&fields.name)),
        (Field::Email, validate_email(&fields.email)),
        (Field::Message, validate_message(&fields.message)),
    ];
    for (field, result) in checks {
        if let Err(e) = result {
            errors.insert(field, e);
        }
    }
    errors
}
