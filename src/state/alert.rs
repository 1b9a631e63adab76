#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Failure,
}

/// The one banner shown for the most recently settled submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Failure,
            text: text.into(),
        }
    }
}
