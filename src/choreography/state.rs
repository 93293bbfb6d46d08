//! Interaction states of the showcase and the reasons commands get refused.

use std::fmt;

/// Phase of the guided camera choreography.
///
/// The scroll dolly owns the camera in the first three states; tweened
/// transitions own it in [`Transitioning`](Self::Transitioning) and
/// [`Returning`](Self::Returning). There is never more than one owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Landing pose. No scroll input has been applied yet.
    Intro,
    /// The dolly shot is partway through its travel.
    Revealing,
    /// The dolly reached full travel; the viewer can act on the overlay.
    AwaitingSelection,
    /// A tweened move toward the overview or a hotspot is in flight.
    Transitioning,
    /// Parked at a hotspot viewpoint with its detail text shown.
    Focused,
    /// A tweened move back from a hotspot is in flight.
    Returning,
}

impl InteractionState {
    /// Whether wheel input is interpreted in this state.
    ///
    /// Scroll stays live in `AwaitingSelection` so backing off the
    /// threshold can undo the reveal, right up until discovery retires
    /// the scroll phase for good.
    #[inline]
    #[must_use]
    pub fn accepts_scroll(self) -> bool {
        matches!(
            self,
            Self::Intro | Self::Revealing | Self::AwaitingSelection
        )
    }

    /// Whether a tweened camera move currently owns the camera.
    #[inline]
    #[must_use]
    pub fn in_transition(self) -> bool {
        matches!(self, Self::Transitioning | Self::Returning)
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Revealing => "revealing",
            Self::AwaitingSelection => "awaiting-selection",
            Self::Transitioning => "transitioning",
            Self::Focused => "focused",
            Self::Returning => "returning",
        };
        f.write_str(name)
    }
}

/// Why a command or transition request was refused.
///
/// Refusals are ordinary values, not errors to propagate: the showcase
/// logs them and the current pose simply persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The subject model has not finished loading, so there is nothing
    /// to frame yet.
    SubjectNotReady,
    /// The command is not legal in the current state (for example, a
    /// back activation while no hotspot is focused).
    StateForbids(InteractionState),
    /// A hotspot selection named an index outside the registry.
    UnknownHotspot(usize),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubjectNotReady => write!(f, "subject model is not loaded yet"),
            Self::StateForbids(state) => {
                write!(f, "not permitted while {state}")
            }
            Self::UnknownHotspot(index) => write!(f, "no hotspot with index {index}"),
        }
    }
}
