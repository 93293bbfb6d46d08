//! Showcase orchestration.
//!
//! A [`Showcase`] owns the choreographer, the overlay, the renderer, and
//! the in-flight asset loads, and ties them together with one rule: per
//! tick, poll loads, advance the choreography, apply queued overlay
//! commands, then render. Input arrives as [`ShowcaseCommand`]s and is
//! applied synchronously.

pub mod command;
pub mod plan;

pub use command::ShowcaseCommand;
pub use plan::{Hotspot, PointLight, ShowcasePlan, Viewpoint};

use std::path::Path;

use web_time::Instant;

use crate::assets::{self, EnvironmentHandle, LoadEvent, LoadTicket, SubjectHandle};
use crate::camera::Camera;
use crate::choreography::CameraChoreographer;
use crate::error::VitrineError;
use crate::options::Options;
use crate::render::{FrameRenderer, RenderError};
use crate::ui::OverlayPanels;

/// One running product showcase.
pub struct Showcase {
    choreographer: CameraChoreographer,
    panels: OverlayPanels,
    renderer: Box<dyn FrameRenderer>,
    model_ticket: Option<LoadTicket<SubjectHandle>>,
    environment_ticket: Option<LoadTicket<EnvironmentHandle>>,
    environment: Option<EnvironmentHandle>,
    retries_left: u32,
}

impl Showcase {
    /// Assemble a showcase from its plan. Call
    /// [`begin_loading`](Self::begin_loading) afterwards to start the
    /// asset loads.
    #[must_use]
    pub fn new(
        plan: ShowcasePlan,
        options: &Options,
        renderer: Box<dyn FrameRenderer>,
        aspect: f32,
    ) -> Self {
        let panels = OverlayPanels::from_plan(&plan);
        Self {
            choreographer: CameraChoreographer::new(plan, options, aspect),
            panels,
            renderer,
            model_ticket: None,
            environment_ticket: None,
            environment: None,
            retries_left: options.loader.max_retries,
        }
    }

    /// Kick off the background loads named by the plan.
    ///
    /// Load *failures* are reported later through the tickets and logged.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError`] if a loader thread fails to spawn.
    pub fn begin_loading(&mut self) -> Result<(), VitrineError> {
        let model_path = self.choreographer.plan().model_path.clone();
        let environment_path = self.choreographer.plan().environment_path.clone();

        log::info!("loading model '{model_path}'");
        self.model_ticket = Some(assets::load_model(Path::new(&model_path))?);

        if let Some(path) = environment_path {
            log::info!("loading environment '{path}'");
            self.environment_ticket = Some(assets::load_environment(Path::new(&path))?);
        }
        Ok(())
    }

    /// Apply one command at time `now`. Refusals are logged, never
    /// propagated; the showcase simply keeps its current pose.
    pub fn execute(&mut self, command: ShowcaseCommand, now: Instant) {
        if let Err(rejection) = self.choreographer.execute(command, now) {
            log::debug!("{command:?} refused: {rejection}");
        }
        self.apply_ui();
    }

    /// Advance one tick: poll loads, advance the choreography, apply
    /// overlay commands, render.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the frame cannot be drawn.
    pub fn update(&mut self, now: Instant) -> Result<(), RenderError> {
        self.poll_model_load();
        self.poll_environment_load();
        let _ = self.choreographer.advance(now);
        self.apply_ui();
        self.renderer.render_frame(self.choreographer.camera())
    }

    /// The drawable area changed size.
    pub fn resize(&mut self, width: u32, height: u32, now: Instant) {
        self.renderer.resize(width, height);
        let aspect = width as f32 / height.max(1) as f32;
        self.execute(ShowcaseCommand::Resize { aspect }, now);
    }

    /// The overlay panel set, for hit-testing and drawing.
    #[inline]
    #[must_use]
    pub fn panels(&self) -> &OverlayPanels {
        &self.panels
    }

    /// The choreographed camera.
    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.choreographer.camera()
    }

    /// The choreography driving this showcase.
    #[inline]
    #[must_use]
    pub fn choreographer(&self) -> &CameraChoreographer {
        &self.choreographer
    }

    /// Mutable choreography access, e.g. for scripted transitions.
    pub fn choreographer_mut(&mut self) -> &mut CameraChoreographer {
        &mut self.choreographer
    }

    /// The loaded environment map, once resolved.
    #[must_use]
    pub fn environment(&self) -> Option<&EnvironmentHandle> {
        self.environment.as_ref()
    }

    /// Whether any asset load is still in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.model_ticket.is_some() || self.environment_ticket.is_some()
    }

    fn apply_ui(&mut self) {
        for command in self.choreographer.take_ui_commands() {
            log::info!("overlay: {command:?}");
            self.panels.apply(&command);
        }
    }

    fn poll_model_load(&mut self) {
        let Some(ticket) = self.model_ticket.take() else {
            return;
        };
        while let Some(event) = ticket.poll() {
            match event {
                LoadEvent::Progress(fraction) => {
                    log::debug!("model {:.0}% loaded", fraction * 100.0);
                }
                LoadEvent::Loaded(subject) => {
                    log::info!(
                        "model '{}' loaded ({} bytes)",
                        subject.label,
                        subject.size_bytes
                    );
                    self.renderer.subject_loaded(&subject);
                    self.choreographer.attach_subject(subject);
                    return;
                }
                LoadEvent::Failed(reason) => {
                    log::error!("model load failed: {reason}");
                    self.retry_model_load();
                    return;
                }
                LoadEvent::Cancelled => {
                    log::info!("model load cancelled");
                    return;
                }
            }
        }
        self.model_ticket = Some(ticket);
    }

    fn retry_model_load(&mut self) {
        if self.retries_left == 0 {
            return;
        }
        self.retries_left -= 1;
        let path = self.choreographer.plan().model_path.clone();
        log::warn!(
            "retrying model load ({} attempt(s) left)",
            self.retries_left
        );
        match assets::load_model(Path::new(&path)) {
            Ok(ticket) => self.model_ticket = Some(ticket),
            Err(err) => log::error!("retry failed to start: {err}"),
        }
    }

    fn poll_environment_load(&mut self) {
        let Some(ticket) = self.environment_ticket.take() else {
            return;
        };
        while let Some(event) = ticket.poll() {
            match event {
                LoadEvent::Progress(fraction) => {
                    log::debug!("environment {:.0}% loaded", fraction * 100.0);
                }
                LoadEvent::Loaded(environment) => {
                    log::info!("environment '{}' loaded", environment.path.display());
                    self.renderer.environment_loaded(&environment);
                    self.environment = Some(environment);
                    return;
                }
                LoadEvent::Failed(reason) => {
                    // The showcase is viewable without an environment map.
                    log::warn!("environment load failed: {reason}");
                    return;
                }
                LoadEvent::Cancelled => {
                    log::info!("environment load cancelled");
                    return;
                }
            }
        }
        self.environment_ticket = Some(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choreography::InteractionState;
    use crate::render::NullRenderer;
    use crate::ui::PanelId;
    use std::sync::atomic::Ordering;
    use web_time::Duration;

    fn temp_model(name: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("vitrine-showcase-{}-{name}", std::process::id()));
        std::fs::write(&path, vec![0x42_u8; 2048]).unwrap();
        path
    }

    fn wait_for_subject(showcase: &mut Showcase) {
        for _ in 0..200 {
            showcase.update(Instant::now()).unwrap();
            if showcase.choreographer().subject().is_some() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("model never resolved");
    }

    #[test]
    fn update_renders_exactly_once_per_tick() {
        let renderer = NullRenderer::new();
        let frames = renderer.frame_counter();
        let mut showcase = Showcase::new(
            ShowcasePlan::default(),
            &Options::default(),
            Box::new(renderer),
            16.0 / 9.0,
        );

        let now = Instant::now();
        for i in 0..5 {
            showcase.update(now + Duration::from_millis(i * 16)).unwrap();
        }
        assert_eq!(frames.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn loaded_model_reaches_the_choreography() {
        let path = temp_model("ok.glb");
        let plan = ShowcasePlan {
            model_path: path.display().to_string(),
            ..ShowcasePlan::default()
        };
        let mut showcase = Showcase::new(
            plan,
            &Options::default(),
            Box::new(NullRenderer::new()),
            16.0 / 9.0,
        );

        showcase.begin_loading().unwrap();
        assert!(showcase.loading());
        wait_for_subject(&mut showcase);
        assert!(!showcase.loading());
        let subject = showcase.choreographer().subject().unwrap();
        assert_eq!(subject.size_bytes, 2048);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_model_burns_retries_then_gives_up() {
        let plan = ShowcasePlan {
            model_path: "/no/such/dir/car.glb".to_owned(),
            ..ShowcasePlan::default()
        };
        let options = Options {
            loader: crate::options::LoaderOptions { max_retries: 2 },
            ..Options::default()
        };
        let mut showcase = Showcase::new(
            plan,
            &options,
            Box::new(NullRenderer::new()),
            16.0 / 9.0,
        );
        showcase.begin_loading().unwrap();

        for _ in 0..200 {
            showcase.update(Instant::now()).unwrap();
            if !showcase.loading() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!showcase.loading());
        assert!(showcase.choreographer().subject().is_none());
        // With no subject, discovery stays refused and the pose holds.
        let now = Instant::now();
        showcase.execute(ShowcaseCommand::Wheel { delta: 700.0 }, now);
        showcase.execute(ShowcaseCommand::ActivateDiscover, now);
        assert_eq!(
            showcase.choreographer().state(),
            InteractionState::AwaitingSelection
        );
    }

    #[test]
    fn resize_forwards_aspect_to_the_camera() {
        let mut showcase = Showcase::new(
            ShowcasePlan::default(),
            &Options::default(),
            Box::new(NullRenderer::new()),
            16.0 / 9.0,
        );
        showcase.resize(1000, 500, Instant::now());
        assert_eq!(showcase.camera().aspect, 2.0);
    }

    #[test]
    fn overlay_tracks_commands_applied_through_the_showcase() {
        let path = temp_model("overlay.glb");
        let plan = ShowcasePlan {
            model_path: path.display().to_string(),
            ..ShowcasePlan::default()
        };
        let mut showcase = Showcase::new(
            plan,
            &Options::default(),
            Box::new(NullRenderer::new()),
            16.0 / 9.0,
        );
        showcase.begin_loading().unwrap();
        wait_for_subject(&mut showcase);

        let now = Instant::now();
        showcase.execute(ShowcaseCommand::Wheel { delta: 700.0 }, now);
        assert!(showcase.panels().is_visible(PanelId::Title));
        assert!(showcase.panels().is_visible(PanelId::DiscoverCta));

        showcase.execute(ShowcaseCommand::ActivateDiscover, now);
        assert!(!showcase.panels().is_visible(PanelId::Title));

        let landed = now + Duration::from_millis(2000);
        showcase.update(landed).unwrap();
        assert!(showcase.panels().is_visible(PanelId::HotspotButton(0)));

        let _ = std::fs::remove_file(path);
    }
}
