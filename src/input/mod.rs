//! Input handling: raw events and their resolution into commands.

mod event;
mod processor;

pub use event::InputEvent;
pub use processor::InputProcessor;
