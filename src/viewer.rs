//! Standalone showcase window backed by winit.
//!
//! ```no_run
//! # use vitrine::Viewer;
//! Viewer::builder()
//!     .with_plan_path("assets/showcases/m5_touring.toml")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{path::Path, sync::Arc};

use glam::Vec2;
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, Window, WindowId},
};

use crate::{
    error::VitrineError,
    input::{InputEvent, InputProcessor},
    options::Options,
    render::{context::RenderContext, RenderError},
    showcase::{Showcase, ShowcaseCommand, ShowcasePlan},
    ui::CursorHint,
    util::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    plan: Option<ShowcasePlan>,
    plan_path: Option<String>,
    options: Option<Options>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            plan: None,
            plan_path: None,
            options: None,
        }
    }

    /// Use an already-constructed plan.
    #[must_use]
    pub fn with_plan(mut self, plan: ShowcasePlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Load the plan from a TOML file at startup. Ignored if
    /// [`with_plan`](Self::with_plan) was also called.
    #[must_use]
    pub fn with_plan_path(mut self, path: impl Into<String>) -> Self {
        self.plan_path = Some(path.into());
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            plan: self.plan,
            plan_path: self.plan_path,
            options: self.options,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs one showcase.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    plan: Option<ShowcasePlan>,
    plan_path: Option<String>,
    options: Option<Options>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), VitrineError> {
        let plan = match (self.plan, self.plan_path) {
            (Some(plan), _) => plan,
            (None, Some(path)) => ShowcasePlan::load(Path::new(&path))?,
            (None, None) => ShowcasePlan::default(),
        };

        let event_loop =
            EventLoop::new().map_err(|e| VitrineError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            showcase: None,
            processor: InputProcessor::new(),
            timing: FrameTiming::new(Instant::now()),
            last_title_update: Instant::now(),
            cursor: Vec2::new(0.5, 0.5),
            title: plan.title.clone(),
            plan: Some(plan),
            options: self.options.unwrap_or_default(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VitrineError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    showcase: Option<Showcase>,
    processor: InputProcessor,
    timing: FrameTiming,
    last_title_update: Instant,
    /// Pointer position normalised to `[0, 1]` in both axes.
    cursor: Vec2,
    title: String,
    plan: Option<ShowcasePlan>,
    options: Options,
}

/// The wgpu surface size, clamped away from zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn normalised_cursor(&self, position: winit::dpi::PhysicalPosition<f64>) -> Vec2 {
        let Some(window) = &self.window else {
            return Vec2::new(0.5, 0.5);
        };
        let (width, height) = viewport_size(window.inner_size());
        #[allow(clippy::cast_possible_truncation)]
        Vec2::new(
            (position.x / f64::from(width)) as f32,
            (position.y / f64::from(height)) as f32,
        )
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(plan) = self.plan.take() else {
            return;
        };

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(logical_w, logical_h))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let renderer =
            match pollster::block_on(RenderContext::new(window.clone(), (vp_w, vp_h), &plan)) {
                Ok(context) => Box::new(context),
                Err(e) => {
                    log::error!("failed to initialise renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

        #[allow(clippy::cast_precision_loss)]
        let aspect = vp_w as f32 / vp_h as f32;
        let mut showcase = Showcase::new(plan, &self.options, renderer, aspect);
        if let Err(e) = showcase.begin_loading() {
            // The stand-in stays ghosted; the choreography still runs.
            log::error!("asset loading did not start: {e}");
        }

        window.request_redraw();
        self.window = Some(window);
        self.showcase = Some(showcase);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        if self.window.is_none() || self.showcase.is_none() {
            return;
        }
        let now = Instant::now();

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(showcase) = &mut self.showcase {
                    showcase.resize(vp_w, vp_h, now);
                }
            }

            WindowEvent::RedrawRequested => {
                let _ = self.timing.tick(now);

                if let Some(showcase) = &mut self.showcase {
                    match showcase.update(now) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceOutdated) => {
                            if let Some(w) = &self.window {
                                let (vp_w, vp_h) = viewport_size(w.inner_size());
                                showcase.resize(vp_w, vp_h, now);
                            }
                        }
                        Err(RenderError::Fatal(reason)) => {
                            log::error!("render failed: {reason}");
                            event_loop.exit();
                            return;
                        }
                    }
                }

                if now.duration_since(self.last_title_update) >= Duration::from_secs(1) {
                    if let Some(w) = &self.window {
                        w.set_title(&format!("{} | {:.0} fps", self.title, self.timing.fps()));
                    }
                    self.last_title_update = now;
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.normalised_cursor(position);
                if let (Some(showcase), Some(window)) = (&self.showcase, &self.window) {
                    let icon = match showcase.panels().cursor_at(self.cursor) {
                        CursorHint::Pointer => CursorIcon::Pointer,
                        CursorHint::Default => CursorIcon::Default,
                    };
                    window.set_cursor(icon);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // Positive travel pulls the camera in, matching page-style
                // scrolling where wheel-down advances.
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 100.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                if let Some(showcase) = &mut self.showcase {
                    if let Some(command) = self
                        .processor
                        .resolve(InputEvent::Wheel {
                            delta: scroll_delta,
                        })
                    {
                        showcase.execute(command, now);
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                if let Some(showcase) = &mut self.showcase {
                    if let Some(panel) = showcase.panels().hit_test(self.cursor) {
                        if let Some(command) =
                            self.processor.resolve(InputEvent::Activate { panel })
                        {
                            showcase.execute(command, now);
                        }
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                // Escape backs out of a focused hotspot; refused elsewhere.
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    if let Some(showcase) = &mut self.showcase {
                        showcase.execute(ShowcaseCommand::ActivateBack, now);
                    }
                }
            }

            _ => (),
        }
    }
}
