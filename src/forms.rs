//! Typed form-field descriptors.
//!
//! Form widgets consume an explicit descriptor (field name, label key,
//! validation rules) instead of duck-typed registration helpers, so no
//! form-state library leaks into the widget contract. Validation failures
//! carry dictionary keys and are turned into localized messages by the
//! caller.

use std::collections::HashMap;

use crate::i18n::{Dictionary, t, t_fmt1};

/// A closed validation rule set for form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationRule {
    /// Value must be non-empty after trimming.
    Required,
    /// Value must have at least this many characters.
    MinLen(usize),
    /// Value must have at most this many characters.
    MaxLen(usize),
    /// Value must look like an email address.
    Email,
}

/// A failed validation: dictionary key plus optional numeric argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Dictionary key of the error message.
    pub key: &'static str,
    /// Placeholder argument for length rules.
    pub arg: Option<usize>,
}

impl FieldError {
    /// What: Localize this error with a dictionary.
    #[must_use]
    pub fn message(&self, dict: &Dictionary) -> String {
        self.arg
            .map_or_else(|| t(dict, self.key), |n| t_fmt1(dict, self.key, n))
    }
}

impl ValidationRule {
    /// What: Check a single value against this rule.
    ///
    /// # Errors
    /// - Returns the dictionary key describing the violation
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Required => {
                if value.trim().is_empty() {
                    return Err(FieldError {
                        key: "auth.errors.required",
                        arg: None,
                    });
                }
            }
            Self::MinLen(min) => {
                if value.chars().count() < min {
                    return Err(FieldError {
                        key: "auth.errors.too_short",
                        arg: Some(min),
                    });
                }
            }
            Self::MaxLen(max) => {
                if value.chars().count() > max {
                    return Err(FieldError {
                        key: "auth.errors.too_long",
                        arg: Some(max),
                    });
                }
            }
            Self::Email => {
                if !looks_like_email(value) {
                    return Err(FieldError {
                        key: "auth.errors.email_invalid",
                        arg: None,
                    });
                }
            }
        }
        Ok(())
    }
}

/// What: Minimal structural email check.
///
/// Details:
/// - One '@', non-empty local part, domain with a dot and no leading/trailing
///   dot; deliberately not RFC-complete
fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.is_empty()
}

/// One form field: name, label key and the rules it must satisfy.
#[derive(Clone, Debug)]
pub struct FormField {
    /// Machine name the submitted value is keyed by.
    pub name: &'static str,
    /// Dictionary key of the field label.
    pub label_key: &'static str,
    /// Rules checked in order; the first violation wins.
    pub rules: Vec<ValidationRule>,
}

impl FormField {
    /// What: Validate a submitted value against this field's rules.
    ///
    /// # Errors
    /// - Returns the first rule violation, in rule order
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        for rule in &self.rules {
            rule.validate(value)?;
        }
        Ok(())
    }
}

/// What: Validate a whole submission against a field list.
///
/// Inputs:
/// - `fields`: Form descriptor
/// - `values`: Submitted values keyed by field name (missing = empty)
///
/// Output:
/// - One `(field name, error)` pair per failing field, in field order
#[must_use]
pub fn validate_form(
    fields: &[FormField],
    values: &HashMap<&str, String>,
) -> Vec<(&'static str, FieldError)> {
    let mut errors = Vec::new();
    for field in fields {
        let value = values.get(field.name).map_or("", String::as_str);
        if let Err(e) = field.validate(value) {
            errors.push((field.name, e));
        }
    }
    errors
}

/// What: The registration form descriptor used by the auth pages.
#[must_use]
pub fn registration_fields() -> Vec<FormField> {
    vec![
        FormField {
            name: "display_name",
            label_key: "auth.display_name",
            rules: vec![ValidationRule::Required, ValidationRule::MaxLen(64)],
        },
        FormField {
            name: "email",
            label_key: "auth.email",
            rules: vec![ValidationRule::Required, ValidationRule::Email],
        },
        FormField {
            name: "password",
            label_key: "auth.password",
            rules: vec![ValidationRule::Required, ValidationRule::MinLen(8)],
        },
    ]
}
