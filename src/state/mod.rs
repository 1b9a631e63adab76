pub mod alert;
pub mod app_state;

pub use alert::{Alert, AlertKind};
pub use app_state::AppState;
