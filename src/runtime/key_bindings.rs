use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Cancel);
        self.bind(KeyBinding::key(KeyCode::Enter), Command::Submit);
        self.bind(KeyBinding::key(KeyCode::Tab), Command::NextFocus);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Command::PrevFocus,
        );
        self.bind(KeyBinding::key(KeyCode::Down), Command::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Up), Command::PrevFocus);
        self.bind(KeyBinding::ctrl(KeyCode::Char('t')), Command::ToggleForm);
        self.bind(KeyBinding::alt(KeyCode::Char('1')), Command::ShowSignUp);
        self.bind(KeyBinding::alt(KeyCode::Char('2')), Command::ShowSignIn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_resolves_to_submit() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(KeyEvent::key(KeyCode::Enter)),
            Some(Command::Submit)
        );
    }

    #[test]
    fn plain_chars_fall_through_to_input() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.resolve(KeyEvent::char('t')), None);
    }

    #[test]
    fn ctrl_t_toggles_the_form() {
        let bindings = KeyBindings::new();
        let event = KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(bindings.resolve(event), Some(Command::ToggleForm));
    }
}
