use crate::form::validators::{Validator, run_validators};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMask {
    #[default]
    Plain,
    Password,
}

pub struct FieldSpec {
    id: String,
    label: String,
    placeholder: Option<String>,
    mask: FieldMask,
    validators: Vec<Validator>,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            mask: FieldMask::default(),
            validators: Vec::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_mask(mut self, mask: FieldMask) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn mask(&self) -> FieldMask {
        self.mask
    }

    /// First validator failure wins; later rules are not consulted.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        run_validators(&self.validators, value)
    }
}
