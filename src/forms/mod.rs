//! Form definitions backing the admin modals and settings panels.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub mod client;
pub mod controller;
pub mod inquiry;
pub mod rules;
pub mod settings;
pub mod user;

pub use controller::{FormController, SubmitError, Submission};

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// A form whose fields are addressed by name and checked with `validator`.
pub trait FormModel: Validate + Default + Clone {
    /// Domain payload produced once the form validates.
    type Output;

    /// Field names in display order.
    const FIELDS: &'static [&'static str];

    /// Human readable label used when composing error messages.
    fn label(field: &str) -> &'static str;

    fn field(&self, name: &str) -> Option<&str>;

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError>;

    /// Converts validated values into the domain payload.
    fn to_output(&self) -> Result<Self::Output, FormError>;

    /// Rules spanning several fields that attributes cannot express. Runs
    /// after the per-field rules.
    fn check_fields(&self, _errors: &mut FieldErrors) {}
}

/// Validation codes ordered by which message wins when a field breaks several rules.
const CODE_PRECEDENCE: &[&str] = &[
    rules::REQUIRED,
    rules::CHOICE,
    rules::EMAIL,
    rules::NUMBER,
    "length",
    "must_match",
];

fn precedence(code: &str) -> usize {
    CODE_PRECEDENCE
        .iter()
        .position(|known| *known == code)
        .unwrap_or(CODE_PRECEDENCE.len())
}

/// Field name to message map. An empty set means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Collapses `validator` output to one message per field.
    pub fn from_validation<F: FormModel>(errors: &ValidationErrors) -> Self {
        let mut messages = BTreeMap::new();

        for (field, field_errors) in errors.field_errors() {
            // Raw identifiers such as `r#type` report their bare name.
            let field = field.trim_start_matches("r#").to_string();
            let Some(error) = field_errors
                .iter()
                .min_by_key(|error| precedence(&error.code))
            else {
                continue;
            };

            let label = F::label(&field);
            let message = match &error.message {
                Some(message) => message.to_string(),
                None if error.code == rules::REQUIRED => format!("{label} is required"),
                None => format!("{label} is invalid"),
            };
            messages.insert(field, message);
        }

        Self(messages)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Field names carrying an error, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::user::UserForm;

    #[test]
    fn required_wins_over_other_rules_on_the_same_field() {
        let form = UserForm::default();
        let errors = match form.validate() {
            Err(errors) => FieldErrors::from_validation::<UserForm>(&errors),
            Ok(()) => FieldErrors::default(),
        };

        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    fn assert_fields_addressable<F: FormModel>() {
        let mut form = F::default();
        for name in F::FIELDS {
            assert!(form.field(name).is_some(), "{name} is readable");
            form.set_field(name, "x".to_string()).unwrap();
            assert_eq!(form.field(name), Some("x"));
            assert_ne!(F::label(name), "Field", "{name} has a label");
        }
    }

    #[test]
    fn every_declared_field_is_addressable() {
        assert_fields_addressable::<UserForm>();
        assert_fields_addressable::<user::EditUserForm>();
        assert_fields_addressable::<client::ClientForm>();
        assert_fields_addressable::<inquiry::ReplyForm>();
        assert_fields_addressable::<settings::ProfileForm>();
        assert_fields_addressable::<settings::PasswordForm>();
    }

    #[test]
    fn controller_lists_entries_in_display_order() {
        let controller = FormController::<inquiry::ReplyForm>::default();

        assert_eq!(controller.entries().collect::<Vec<_>>(), vec![("message", "")]);
    }

    #[test]
    fn edits_can_remove_single_entries() {
        let mut errors = FieldErrors::default();
        errors.insert("name", "Name is required");
        errors.insert("email", "Email is required");

        assert_eq!(errors.remove("name").as_deref(), Some("Name is required"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
    }
}
