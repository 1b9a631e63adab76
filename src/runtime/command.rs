use crate::terminal::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Cancel,
    Submit,
    NextFocus,
    PrevFocus,
    ShowSignUp,
    ShowSignIn,
    ToggleForm,
    InputKey(KeyEvent),
    Tick,
}
