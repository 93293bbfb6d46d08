//! Overlay commands emitted by the choreographer.
//!
//! Each variant names a moment in the choreography rather than a panel
//! mutation, so the overlay decides for itself what a moment means for
//! visibility. The choreographer queues these; the showcase drains the
//! queue and applies them in order.

/// A named choreography moment the overlay reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// The dolly reached full travel; present title and call-to-action.
    ShowIntro,
    /// The dolly dropped back below full travel; withdraw the intro.
    HideIntro,
    /// Discovery was activated; the intro is gone for good.
    DismissIntro,
    /// A tweened camera move started; clear transient interactive panels.
    BeginTransition,
    /// The overview pose was reached; present the hotspot buttons.
    EnterSelection,
    /// A hotspot pose was reached; present its detail text and the back
    /// button.
    EnterFocus {
        /// Index of the focused hotspot in the plan's registry.
        hotspot: usize,
        /// Detail text to show.
        detail: String,
    },
}
