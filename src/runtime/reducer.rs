use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::state::app_state::AppState;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Command::Cancel => {
                // Esc first dismisses the alert; with nothing shown it quits.
                if state.dismiss_alert() {
                    vec![Effect::RequestRender]
                } else {
                    state.request_exit();
                    vec![Effect::RequestRender]
                }
            }
            Command::Submit => match state.begin_submission() {
                Some(request) => vec![Effect::Submit(request), Effect::RequestRender],
                None => vec![Effect::RequestRender],
            },
            Command::NextFocus => {
                state.active_form_mut().focus_next();
                vec![Effect::RequestRender]
            }
            Command::PrevFocus => {
                state.active_form_mut().focus_prev();
                vec![Effect::RequestRender]
            }
            Command::ShowSignUp => {
                if state.show_form(crate::form::FormKind::SignUp) {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Command::ShowSignIn => {
                if state.show_form(crate::form::FormKind::SignIn) {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Command::ToggleForm => {
                if state.toggle_form() {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Command::InputKey(key) => {
                if state.handle_key(key) {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Command::Tick => vec![],
        }
    }
}
