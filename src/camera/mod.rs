//! Camera primitives shared by the choreographer and the renderer.

/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraUniform};
