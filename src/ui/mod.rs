//! Overlay model: panels, their identities, and the commands that drive
//! them.
//!
//! The overlay never reads choreography state. It reacts to
//! [`UiCommand`]s exclusively, so any frontend (the built-in viewer, a
//! test harness, an embedding) renders the same visibility for the same
//! command history.

mod command;
mod panel;

pub use command::UiCommand;
pub use panel::{CursorHint, OverlayPanels, Panel, PanelId};
