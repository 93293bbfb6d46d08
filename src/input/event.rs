//! Device-level input events.

use crate::ui::PanelId;

/// A raw interaction, before it is resolved into a showcase command.
///
/// The windowing layer produces these from wheel and pointer events; web
/// embeddings produce them from DOM listeners. Either way the showcase
/// itself only ever sees [`ShowcaseCommand`](crate::ShowcaseCommand)s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Scroll wheel movement, positive pulling the camera along the dolly.
    Wheel {
        /// Wheel delta in scroll units.
        delta: f32,
    },
    /// A click or tap landed on an overlay panel.
    Activate {
        /// The panel that was hit.
        panel: PanelId,
    },
}
