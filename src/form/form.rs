use crate::form::field::{FieldMask, FieldSpec};
use crate::form::text_edit;
use crate::terminal::{KeyCode, KeyEvent};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SignUp,
    SignIn,
}

impl FormKind {
    pub fn other(self) -> Self {
        match self {
            Self::SignUp => Self::SignIn,
            Self::SignIn => Self::SignUp,
        }
    }
}

pub struct Field {
    spec: FieldSpec,
    value: String,
    cursor: usize,
    error: Option<String>,
}

impl Field {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            cursor: 0,
            error: None,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        text_edit::clamp_cursor(self.cursor, &self.value)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn display_value(&self) -> String {
        match self.spec.mask() {
            FieldMask::Plain => self.value.clone(),
            FieldMask::Password => "*".repeat(text_edit::char_count(&self.value)),
        }
    }
}

/// Live state of one mounted form: ordered fields, per-field errors, focus.
pub struct FormState {
    kind: FormKind,
    title: String,
    subtitle: String,
    fields: Vec<Field>,
    focus: usize,
}

impl FormState {
    pub fn new(
        kind: FormKind,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        specs: Vec<FieldSpec>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: subtitle.into(),
            fields: specs.into_iter().map(Field::new).collect(),
            focus: 0,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focused_index(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn value_of(&self, id: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.spec.id() == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    pub fn error_of(&self, id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.spec.id() == id)
            .and_then(Field::error)
    }

    /// Snapshot of all values in field order, taken at submit time.
    pub fn values(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.spec.id().to_string(), field.value.clone()))
            .collect()
    }

    /// Programmatic edit: behaves like typing, including clearing the error.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.spec.id() == id) {
            field.value = value.into();
            field.cursor = text_edit::char_count(&field.value);
            field.error = None;
        }
    }

    /// Route an editing key to the focused field. Content changes clear that
    /// field's error; other fields' errors are untouched.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return false;
        };
        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut field.value, &mut field.cursor, ch);
                field.error = None;
                true
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut field.value, &mut field.cursor) {
                    field.error = None;
                    return true;
                }
                false
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut field.value, &mut field.cursor) {
                    field.error = None;
                    return true;
                }
                false
            }
            KeyCode::Left => text_edit::move_left(&mut field.cursor, &field.value),
            KeyCode::Right => text_edit::move_right(&mut field.cursor, &field.value),
            KeyCode::Home => {
                field.cursor = 0;
                true
            }
            KeyCode::End => {
                field.cursor = text_edit::char_count(&field.value);
                true
            }
            _ => false,
        }
    }

    /// Recompute every field's error. Returns true when the form is clean.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            match field.spec.validate(&field.value) {
                Ok(()) => field.error = None,
                Err(error) => {
                    field.error = Some(error);
                    valid = false;
                }
            }
        }
        valid
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.cursor = 0;
            field.error = None;
        }
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validators::{min_length, required};
    use crate::terminal::KeyEvent;

    fn sample_form() -> FormState {
        FormState::new(
            FormKind::SignIn,
            "Sign in",
            "Sign in with an existing account",
            vec![
                FieldSpec::new("name", "Name")
                    .with_validator(required("Name is required"))
                    .with_validator(min_length(2, "Name must be at least 2 characters")),
                FieldSpec::new("token", "Token").with_validator(required("Token is required")),
            ],
        )
    }

    #[test]
    fn validate_all_reports_first_failure_per_field() {
        let mut form = sample_form();
        assert!(!form.validate_all());
        assert_eq!(form.error_of("name"), Some("Name is required"));
        assert_eq!(form.error_of("token"), Some("Token is required"));

        form.set_value("name", "j");
        assert!(!form.validate_all());
        assert_eq!(form.error_of("name"), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn errors_coexist_across_fields() {
        let mut form = sample_form();
        form.validate_all();
        assert!(form.error_of("name").is_some());
        assert!(form.error_of("token").is_some());
    }

    #[test]
    fn typing_clears_only_the_edited_fields_error() {
        let mut form = sample_form();
        form.validate_all();

        form.handle_key(KeyEvent::char('j'));
        assert_eq!(form.error_of("name"), None);
        assert_eq!(form.error_of("token"), Some("Token is required"));
    }

    #[test]
    fn backspace_without_content_keeps_the_error() {
        let mut form = sample_form();
        form.validate_all();
        assert!(!form.handle_key(KeyEvent::key(KeyCode::Backspace)));
        assert_eq!(form.error_of("name"), Some("Name is required"));
    }

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut form = sample_form();
        form.set_value("name", "jin");
        form.focus_next();
        form.validate_all();
        form.reset();

        assert_eq!(form.value_of("name"), "");
        assert_eq!(form.value_of("token"), "");
        assert!(!form.has_errors());
        assert_eq!(form.focused_index(), 0);
    }

    #[test]
    fn values_preserve_field_order() {
        let mut form = sample_form();
        form.set_value("name", "jin");
        form.set_value("token", "t-1");
        let values = form.values();
        let keys: Vec<&str> = values.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "token"]);
        assert_eq!(values["name"], "jin");
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = sample_form();
        form.focus_prev();
        assert_eq!(form.focused_index(), 1);
        form.focus_next();
        assert_eq!(form.focused_index(), 0);
    }

    #[test]
    fn password_mask_hides_display_value() {
        let mut form = FormState::new(
            FormKind::SignUp,
            "Sign up",
            "",
            vec![FieldSpec::new("password", "Password").with_mask(FieldMask::Password)],
        );
        form.set_value("password", "secret");
        assert_eq!(form.fields()[0].display_value(), "******");
    }
}
