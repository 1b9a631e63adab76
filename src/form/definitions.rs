//! The two concrete forms and their submission payloads.

use crate::account::client::{CreateAccountRequest, SignInRequest};
use crate::form::field::{FieldMask, FieldSpec};
use crate::form::form::{FormKind, FormState};
use crate::form::validators::{email, min_length, required};
use crate::runtime::submit::SubmissionRequest;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";

fn name_field() -> FieldSpec {
    FieldSpec::new(FIELD_NAME, "Name")
        .with_placeholder("Enter your name")
        .with_validator(required("Name is required"))
        .with_validator(min_length(2, "Name must be at least 2 characters"))
}

pub fn signin_form() -> FormState {
    FormState::new(
        FormKind::SignIn,
        "Sign in",
        "Sign in with an existing account",
        vec![name_field()],
    )
}

pub fn signup_form() -> FormState {
    FormState::new(
        FormKind::SignUp,
        "Sign up",
        "Create a new account to get started",
        vec![
            name_field(),
            FieldSpec::new(FIELD_EMAIL, "Email")
                .with_placeholder("you@example.com")
                .with_validator(required("Email is required"))
                .with_validator(email("Enter a valid email address")),
            FieldSpec::new(FIELD_PASSWORD, "Password")
                .with_placeholder("At least 8 characters")
                .with_mask(FieldMask::Password)
                .with_validator(required("Password is required"))
                .with_validator(min_length(8, "Password must be at least 8 characters")),
        ],
    )
}

/// Snapshot a validated form into its client request. Later edits to the
/// form do not touch the outgoing payload.
pub fn submission_for(form: &FormState) -> SubmissionRequest {
    let mut values = form.values();
    let mut take = |id: &str| values.swap_remove(id).unwrap_or_default();
    match form.kind() {
        FormKind::SignIn => SubmissionRequest::SignIn(SignInRequest {
            name: take(FIELD_NAME),
        }),
        FormKind::SignUp => SubmissionRequest::SignUp(CreateAccountRequest {
            name: take(FIELD_NAME),
            email: take(FIELD_EMAIL),
            password: take(FIELD_PASSWORD),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signin_name_rules_apply_in_order() {
        let mut form = signin_form();
        assert!(!form.validate_all());
        assert_eq!(form.error_of(FIELD_NAME), Some("Name is required"));

        form.set_value(FIELD_NAME, "j");
        assert!(!form.validate_all());
        assert_eq!(
            form.error_of(FIELD_NAME),
            Some("Name must be at least 2 characters")
        );

        form.set_value(FIELD_NAME, "jin");
        assert!(form.validate_all());
    }

    #[test]
    fn signup_fields_validate_independently() {
        let mut form = signup_form();
        form.set_value(FIELD_NAME, "jin");
        form.set_value(FIELD_EMAIL, "not-an-address");
        form.set_value(FIELD_PASSWORD, "short");

        assert!(!form.validate_all());
        assert_eq!(form.error_of(FIELD_NAME), None);
        assert_eq!(form.error_of(FIELD_EMAIL), Some("Enter a valid email address"));
        assert_eq!(
            form.error_of(FIELD_PASSWORD),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn signin_submission_carries_the_name() {
        let mut form = signin_form();
        form.set_value(FIELD_NAME, "jin");
        assert_eq!(
            submission_for(&form),
            SubmissionRequest::SignIn(SignInRequest { name: "jin".into() })
        );
    }

    #[test]
    fn submission_is_a_snapshot_of_current_values() {
        let mut form = signin_form();
        form.set_value(FIELD_NAME, "jin");
        let request = submission_for(&form);

        form.set_value(FIELD_NAME, "someone else");
        assert_eq!(
            request,
            SubmissionRequest::SignIn(SignInRequest { name: "jin".into() })
        );
    }

    #[test]
    fn submission_snapshots_current_values() {
        let mut form = signup_form();
        form.set_value(FIELD_NAME, "jin");
        form.set_value(FIELD_EMAIL, "jin@example.com");
        form.set_value(FIELD_PASSWORD, "hunter2hunter2");

        let request = submission_for(&form);
        assert_eq!(
            request,
            SubmissionRequest::SignUp(CreateAccountRequest {
                name: "jin".into(),
                email: "jin@example.com".into(),
                password: "hunter2hunter2".into(),
            })
        );
    }
}
