pub mod definitions;
pub mod field;
pub mod form;
pub mod text_edit;
pub mod validators;

pub use form::{FormKind, FormState};
