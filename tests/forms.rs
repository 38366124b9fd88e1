use std::cell::Cell;

use crm_admin::forms::client::ClientForm;
use crm_admin::forms::user::UserForm;
use crm_admin::forms::{FormController, SubmitError};

fn user_form(email: &str, password: &str, confirm: &str) -> FormController<UserForm> {
    let mut form = FormController::<UserForm>::default();
    form.set_field("name", "Sarah Johnson").unwrap();
    form.set_field("email", email).unwrap();
    form.set_field("password", password).unwrap();
    form.set_field("confirm_password", confirm).unwrap();
    form
}

#[test]
fn whitespace_only_required_fields_block_submission() {
    let mut form = user_form("sarah@example.com", "longenough1", "longenough1");
    form.set_field("name", " \t ").unwrap();
    let calls = Cell::new(0);

    let result = form.submit(|_| {
        calls.set(calls.get() + 1);
        Ok(())
    });

    assert!(matches!(result, Err(SubmitError::Invalid(_))));
    assert_eq!(calls.get(), 0);
    assert_eq!(form.error("name"), Some("Name is required"));
}

#[test]
fn email_shape_rule() {
    let invalid = user_form("a@b", "longenough1", "longenough1");
    assert_eq!(
        invalid.validate().get("email"),
        Some("Enter a valid email address")
    );

    let valid = user_form("a@b.com", "longenough1", "longenough1");
    assert!(valid.validate().is_empty());
}

#[test]
fn password_length_rule() {
    let short = user_form("a@b.com", "short1", "short1");
    assert_eq!(
        short.validate().get("password"),
        Some("Password must be at least 8 characters")
    );

    let long = user_form("a@b.com", "longenough1", "longenough1");
    assert!(!long.validate().contains("password"));
}

#[test]
fn mismatch_is_reported_on_confirmation_only() {
    let form = user_form("a@b.com", "Abc12345", "Abc99999");

    let errors = form.validate();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
}

#[test]
fn validation_covers_every_field_at_once() {
    let form = FormController::<ClientForm>::default();

    let errors = form.validate();

    assert!(errors.contains("name"));
    assert!(errors.contains("email"));
}

#[test]
fn errors_survive_until_the_field_is_edited() {
    let mut form = user_form("a@b", "short1", "short1");
    let _ = form.submit(|_| Ok(()));
    assert!(form.error("email").is_some());
    assert!(form.error("password").is_some());

    form.set_field("email", "still-wrong").unwrap();

    assert_eq!(form.error("email"), None);
    assert!(form.error("password").is_some());
}

#[test]
fn reentrant_submit_triggers_one_side_effect() {
    let mut form = user_form("a@b.com", "longenough1", "longenough1");
    let calls = Cell::new(0);

    let pending = form.begin_submit().expect("valid form");
    assert_eq!(pending.payload().email, "a@b.com");
    for _ in 0..3 {
        let again = form.submit(|_| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        assert!(matches!(again, Err(SubmitError::InFlight)));
    }
    pending
        .commit(|_| {
            calls.set(calls.get() + 1);
            Ok(())
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert!(!form.is_submitting());
}
