//! Guided camera choreography.
//!
//! This is the interaction core of the crate: a scroll-driven reveal
//! dolly, a transition orchestrator for tweened moves between authored
//! viewpoints, and the state machine that decides which of the two owns
//! the camera at any moment.

mod choreographer;
mod scroll;
mod state;

pub use choreographer::{CameraChoreographer, TransitionGoal, TransitionRequest};
pub use scroll::ScrollDolly;
pub use state::{InteractionState, Rejection};
