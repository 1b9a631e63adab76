pub mod account;
pub mod config;
pub mod form;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;

pub use account::client;
pub use account::error;
pub use account::messages;
pub use form::definitions;
pub use form::validators;
pub use runtime::reducer;
pub use runtime::runner;
pub use runtime::submit;
pub use state::app_state;
pub use terminal::terminal_event;
pub use ui::frame;
pub use ui::renderer;
pub use ui::span;
pub use ui::style;
