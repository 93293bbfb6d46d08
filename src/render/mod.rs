//! Rendering boundary.
//!
//! The showcase core drives any renderer through [`FrameRenderer`] and
//! never touches pipeline state itself: it hands over the camera once per
//! tick and forwards loaded assets. The wgpu-backed implementation lives
//! in [`context`] behind the `viewer` feature; [`NullRenderer`] serves
//! headless runs and tests.

#[cfg(feature = "viewer")]
pub mod context;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::assets::{EnvironmentHandle, SubjectHandle};
use crate::camera::Camera;

/// Failure while presenting one frame.
#[derive(Debug)]
pub enum RenderError {
    /// The surface no longer matches the window; reconfigure and retry
    /// next tick.
    SurfaceOutdated,
    /// Unrecoverable renderer failure.
    Fatal(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceOutdated => write!(f, "surface outdated"),
            Self::Fatal(msg) => write!(f, "render failure: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// What the showcase needs from a renderer, and nothing more.
pub trait FrameRenderer {
    /// Draw one frame from the given camera.
    fn render_frame(&mut self, camera: &Camera) -> Result<(), RenderError>;

    /// The drawable area changed size.
    fn resize(&mut self, width: u32, height: u32);

    /// The subject model finished loading.
    fn subject_loaded(&mut self, _subject: &SubjectHandle) {}

    /// The environment map finished loading.
    fn environment_loaded(&mut self, _environment: &EnvironmentHandle) {}
}

/// Renderer that draws nothing.
///
/// Keeps the full choreography runnable without a GPU; the shared frame
/// counter lets a harness confirm it was ticked.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames: Arc<AtomicUsize>,
}

impl NullRenderer {
    /// Create a renderer that discards every frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter incremented once per rendered frame. Clone it before
    /// handing the renderer off.
    #[must_use]
    pub fn frame_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.frames)
    }
}

impl FrameRenderer for NullRenderer {
    fn render_frame(&mut self, camera: &Camera) -> Result<(), RenderError> {
        let _ = self.frames.fetch_add(1, Ordering::Relaxed);
        log::trace!("null render from eye {:?}", camera.eye);
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;
    use glam::Vec3;

    #[test]
    fn null_renderer_counts_frames() {
        let mut renderer = NullRenderer::new();
        let frames = renderer.frame_counter();
        let camera = Camera::new(
            Vec3::new(0.0, 0.8, 2.4),
            Vec3::ZERO,
            1.6,
            &CameraOptions::default(),
        );

        for _ in 0..3 {
            renderer.render_frame(&camera).unwrap();
        }
        assert_eq!(frames.load(Ordering::Relaxed), 3);
    }
}
