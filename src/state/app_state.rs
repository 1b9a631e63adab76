use crate::account::messages;
use crate::form::definitions::{self, signin_form, signup_form};
use crate::form::form::{FormKind, FormState};
use crate::runtime::submit::{SubmissionOutcome, SubmissionRequest};
use crate::state::alert::Alert;
use crate::terminal::KeyEvent;

/// Everything the reducer mutates and the renderer projects: the mounted
/// form, the in-flight guard, the current alert, and the exit flag.
pub struct AppState {
    active: FormKind,
    signup: FormState,
    signin: FormState,
    in_flight: bool,
    alert: Option<Alert>,
    should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active: FormKind::SignUp,
            signup: signup_form(),
            signin: signin_form(),
            in_flight: false,
            alert: None,
            should_exit: false,
        }
    }

    pub fn active_kind(&self) -> FormKind {
        self.active
    }

    pub fn active_form(&self) -> &FormState {
        self.form(self.active)
    }

    pub fn active_form_mut(&mut self) -> &mut FormState {
        self.form_mut(self.active)
    }

    pub fn form(&self, kind: FormKind) -> &FormState {
        match kind {
            FormKind::SignUp => &self.signup,
            FormKind::SignIn => &self.signin,
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut FormState {
        match kind {
            FormKind::SignUp => &mut self.signup,
            FormKind::SignIn => &mut self.signin,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    /// Mount the other form. Refused while a call is outstanding so the
    /// completion always finds the form it belongs to.
    pub fn toggle_form(&mut self) -> bool {
        self.show_form(self.active.other())
    }

    pub fn show_form(&mut self, kind: FormKind) -> bool {
        if self.in_flight || kind == self.active {
            return false;
        }
        // Remount semantics: the incoming form starts from scratch.
        match kind {
            FormKind::SignUp => self.signup = signup_form(),
            FormKind::SignIn => self.signin = signin_form(),
        }
        self.active = kind;
        self.alert = None;
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.active_form_mut().handle_key(key)
    }

    /// Validate the mounted form and, if clean, flip the in-flight guard and
    /// hand back the request to run. `None` means nothing left this method:
    /// either validation failed (errors are now set inline) or a call is
    /// already outstanding.
    pub fn begin_submission(&mut self) -> Option<SubmissionRequest> {
        if self.in_flight {
            return None;
        }
        if !self.active_form_mut().validate_all() {
            return None;
        }
        self.alert = None;
        self.in_flight = true;
        Some(definitions::submission_for(self.active_form()))
    }

    /// Apply a settled submission. The guard drops first so every outcome,
    /// expected or not, releases it.
    pub fn apply_completion(&mut self, outcome: SubmissionOutcome) {
        self.in_flight = false;
        let kind = outcome.kind;
        match outcome.result {
            Ok(record) => {
                let text = match kind {
                    FormKind::SignUp => messages::signup_success(&record),
                    FormKind::SignIn => messages::signin_success(&record),
                };
                self.alert = Some(Alert::success(text));
                self.form_mut(kind).reset();
            }
            Err(error) => {
                let text = match kind {
                    FormKind::SignUp => messages::signup_failure(&error),
                    FormKind::SignIn => messages::signin_failure(&error),
                };
                self.alert = Some(Alert::failure(text));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::client::AccountRecord;
    use crate::account::error::{ApiError, ErrorCode};
    use crate::form::definitions::FIELD_NAME;
    use crate::state::alert::AlertKind;

    fn signin_state(name: &str) -> AppState {
        let mut state = AppState::new();
        state.show_form(FormKind::SignIn);
        state.active_form_mut().set_value(FIELD_NAME, name);
        state
    }

    fn settled(state: &AppState, result: Result<AccountRecord, ApiError>) -> SubmissionOutcome {
        SubmissionOutcome {
            kind: state.active_kind(),
            result,
        }
    }

    #[test]
    fn empty_name_blocks_submission_with_inline_error() {
        let mut state = signin_state("");
        assert_eq!(state.begin_submission(), None);
        assert!(!state.in_flight());
        assert_eq!(state.active_form().error_of(FIELD_NAME), Some("Name is required"));
    }

    #[test]
    fn short_name_blocks_submission() {
        let mut state = signin_state("j");
        assert_eq!(state.begin_submission(), None);
        assert_eq!(
            state.active_form().error_of(FIELD_NAME),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn valid_submission_raises_the_guard_once() {
        let mut state = signin_state("jin");
        let first = state.begin_submission();
        assert!(first.is_some());
        assert!(state.in_flight());

        // Second submit while in flight is a no-op.
        assert_eq!(state.begin_submission(), None);
    }

    #[test]
    fn no_such_user_maps_to_table_string_and_keeps_form_state() {
        let mut state = signin_state("jin");
        state.begin_submission().unwrap();
        let outcome = settled(&state, Err(ApiError::api(ErrorCode::NoSuchUser, None)));
        state.apply_completion(outcome);

        assert!(!state.in_flight());
        let alert = state.alert().unwrap();
        assert_eq!(alert.kind, AlertKind::Failure);
        assert_eq!(alert.text, "No account with that name exists. Sign up first.");
        assert_eq!(state.active_form().value_of(FIELD_NAME), "jin");
    }

    #[test]
    fn success_shows_identifier_and_resets_the_form() {
        let mut state = signin_state("jin");
        state.begin_submission().unwrap();
        let outcome = settled(&state, Ok(AccountRecord { id: "42".into() }));
        state.apply_completion(outcome);

        assert!(!state.in_flight());
        let alert = state.alert().unwrap();
        assert_eq!(alert.kind, AlertKind::Success);
        assert!(alert.text.contains("42"));
        assert_eq!(state.active_form().value_of(FIELD_NAME), "");
    }

    #[test]
    fn unexpected_failure_shows_generic_message_and_releases_guard() {
        let mut state = signin_state("jin");
        state.begin_submission().unwrap();
        let outcome = settled(&state, Err(ApiError::Unexpected("boom".into())));
        state.apply_completion(outcome);

        assert!(!state.in_flight());
        assert_eq!(state.alert().unwrap().text, messages::GENERIC_FAILURE);
    }

    #[test]
    fn sequential_submissions_each_produce_a_request() {
        let mut state = signin_state("jin");
        let first = state.begin_submission().unwrap();
        state.apply_completion(settled(&state, Ok(AccountRecord { id: "1".into() })));

        state.active_form_mut().set_value(FIELD_NAME, "jin");
        let second = state.begin_submission().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn switching_forms_is_refused_while_in_flight() {
        let mut state = signin_state("jin");
        state.begin_submission().unwrap();
        assert!(!state.toggle_form());
        assert_eq!(state.active_kind(), FormKind::SignIn);
    }

    #[test]
    fn switching_forms_remounts_the_target_empty() {
        let mut state = AppState::new();
        state.active_form_mut().set_value(FIELD_NAME, "leftover");
        assert!(state.show_form(FormKind::SignIn));
        assert!(state.show_form(FormKind::SignUp));
        assert_eq!(state.active_form().value_of(FIELD_NAME), "");
    }

    #[test]
    fn new_submission_clears_the_previous_alert() {
        let mut state = signin_state("jin");
        state.begin_submission().unwrap();
        state.apply_completion(settled(&state, Err(ApiError::api(ErrorCode::Network, None))));
        assert!(state.alert().is_some());

        state.begin_submission().unwrap();
        assert!(state.alert().is_none());
    }
}
