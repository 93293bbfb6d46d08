//! The showcase's complete interactive vocabulary.
//!
//! Every user-facing operation (wheel tick, overlay click, viewport
//! change) is represented as a `ShowcaseCommand`. Consumers construct
//! commands and pass them to
//! [`CameraChoreographer::execute`](crate::choreography::CameraChoreographer::execute);
//! the choreographer never cares how a command was triggered.

/// A discrete operation the showcase can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowcaseCommand {
    // ── Reveal phase ────────────────────────────────────────────────
    /// One raw wheel tick (positive = scroll down / dolly out).
    Wheel {
        /// Unscaled wheel delta.
        delta: f32,
    },

    // ── Overlay activations ─────────────────────────────────────────
    /// The discover call-to-action was clicked.
    ActivateDiscover,

    /// A hotspot button was clicked.
    SelectHotspot {
        /// Index into the plan's hotspot registry.
        index: usize,
    },

    /// The back button was clicked while focused.
    ActivateBack,

    // ── Viewport ────────────────────────────────────────────────────
    /// The window or surface changed shape.
    Resize {
        /// New width / height ratio.
        aspect: f32,
    },
}
