pub mod frame;
pub mod renderer;
pub mod span;
pub mod style;
