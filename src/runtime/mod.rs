pub mod command;
pub mod effect;
pub mod key_bindings;
pub mod reducer;
pub mod runner;
pub mod submit;

pub use command::Command;
pub use effect::Effect;
pub use runner::Runtime;
