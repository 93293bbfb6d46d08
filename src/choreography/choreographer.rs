//! The camera choreographer.
//!
//! Exactly one thing owns the camera at any moment: the scroll dolly
//! during the reveal, or the active tween during a transition. Commands
//! that would break that exclusivity are refused with a [`Rejection`]
//! value and the current pose persists. Overlay changes are queued as
//! [`UiCommand`]s for the showcase to drain, never applied directly.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::scroll::ScrollDolly;
use super::state::{InteractionState, Rejection};
use crate::assets::SubjectHandle;
use crate::camera::Camera;
use crate::options::{Options, TransitionOptions};
use crate::showcase::command::ShowcaseCommand;
use crate::showcase::plan::{ShowcasePlan, Viewpoint};
use crate::tween::{EasingFunction, Tween};
use crate::ui::UiCommand;

/// Aim point used while no subject has resolved yet.
const FALLBACK_LOOK_AT: Vec3 = Vec3::new(0.0, 0.35, 0.0);

/// What a transition does to the interaction state when it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionGoal {
    /// The discover move: land in selection with hotspot buttons shown.
    RevealHotspots,
    /// Land parked on a hotspot with its detail presented.
    Focus {
        /// Index into the plan's hotspot registry.
        hotspot: usize,
    },
    /// Land back at the pose recorded before the hotspot zoom.
    Return,
}

/// A request for one tweened camera move.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    /// Pose to glide to.
    pub target: Viewpoint,
    /// How long the glide takes.
    pub duration: Duration,
    /// Progress shaping for the glide.
    pub easing: EasingFunction,
    /// State and overlay consequences on arrival.
    pub goal: TransitionGoal,
}

/// Where the camera aims while gliding or parked.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LookTarget {
    /// A fixed world-space point.
    Fixed(Vec3),
    /// The live subject position, re-read every tick.
    Subject,
}

#[derive(Debug)]
struct ActiveTransition {
    tween: Tween<Vec3>,
    goal: TransitionGoal,
}

/// Drives the camera through the scripted showcase flow.
#[derive(Debug)]
pub struct CameraChoreographer {
    state: InteractionState,
    dolly: ScrollDolly,
    scroll_retired: bool,
    camera: Camera,
    look: LookTarget,
    transition: Option<ActiveTransition>,
    subject: Option<SubjectHandle>,
    plan: ShowcasePlan,
    transitions: TransitionOptions,
    return_pose: Option<Viewpoint>,
    focused: Option<usize>,
    ui_queue: Vec<UiCommand>,
}

impl CameraChoreographer {
    /// Set up the choreography at the plan's landing pose.
    #[must_use]
    pub fn new(plan: ShowcasePlan, options: &Options, aspect: f32) -> Self {
        let look = plan
            .initial
            .look_at
            .map_or(LookTarget::Subject, LookTarget::Fixed);
        let aim = match look {
            LookTarget::Fixed(point) => point,
            LookTarget::Subject => FALLBACK_LOOK_AT,
        };
        let camera = Camera::new(plan.initial.position, aim, aspect, &options.camera);

        Self {
            state: InteractionState::Intro,
            dolly: ScrollDolly::new(plan.initial.position, &options.scroll),
            scroll_retired: false,
            camera,
            look,
            transition: None,
            subject: None,
            plan,
            transitions: options.transitions.clone(),
            return_pose: None,
            focused: None,
            ui_queue: Vec::new(),
        }
    }

    // ── Command entry point ─────────────────────────────────────────

    /// Perform one command at time `now`.
    ///
    /// A refusal leaves every piece of state untouched; the caller is
    /// expected to log it and move on.
    pub fn execute(
        &mut self,
        command: ShowcaseCommand,
        now: Instant,
    ) -> Result<(), Rejection> {
        match command {
            ShowcaseCommand::Wheel { delta } => {
                self.handle_wheel(delta);
                Ok(())
            }
            ShowcaseCommand::ActivateDiscover => self.handle_discover(now),
            ShowcaseCommand::SelectHotspot { index } => self.handle_select(index, now),
            ShowcaseCommand::ActivateBack => self.handle_back(now),
            ShowcaseCommand::Resize { aspect } => {
                self.camera.aspect = aspect;
                Ok(())
            }
        }
    }

    /// Begin a tweened camera move, replacing any move already in
    /// flight. The replaced move's arrival effects never fire.
    ///
    /// Starts from the camera's current interpolated position, so
    /// preempting mid-glide redirects smoothly instead of snapping.
    pub fn request_transition(
        &mut self,
        request: TransitionRequest,
        now: Instant,
    ) -> Result<(), Rejection> {
        if self.subject.is_none() {
            return Err(Rejection::SubjectNotReady);
        }

        let tween = Tween::new(
            self.camera.eye,
            request.target.position,
            request.duration,
            request.easing,
            now,
        );
        self.look = request
            .target
            .look_at
            .map_or(LookTarget::Subject, LookTarget::Fixed);
        let next = if request.goal == TransitionGoal::Return {
            InteractionState::Returning
        } else {
            InteractionState::Transitioning
        };
        self.set_state(next);
        self.transition = Some(ActiveTransition {
            tween,
            goal: request.goal,
        });
        Ok(())
    }

    /// Advance the choreography one tick.
    ///
    /// Samples the active tween, fires its arrival effects exactly once
    /// on the tick where progress reaches 1.0, then re-aims the camera
    /// at the current look target. Returns whether a move is still in
    /// flight.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let Some(active) = &self.transition {
            self.camera.eye = active.tween.sample(now);
            if active.tween.is_complete(now) {
                let goal = active.goal;
                self.transition = None;
                self.finish_transition(goal);
            }
        }
        self.camera.target = self.look_point();
        self.transition.is_some()
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Hand the loaded subject to the choreography. Transitions are
    /// refused until this happens.
    pub fn attach_subject(&mut self, subject: SubjectHandle) {
        log::debug!("subject '{}' attached", subject.label);
        self.subject = Some(subject);
    }

    /// The loaded subject, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&SubjectHandle> {
        self.subject.as_ref()
    }

    /// Mutable access to the subject, e.g. to nudge its position.
    /// Tracking viewpoints follow on the next [`advance`](Self::advance).
    pub fn subject_mut(&mut self) -> Option<&mut SubjectHandle> {
        self.subject.as_mut()
    }

    // ── Observers ───────────────────────────────────────────────────

    /// Current interaction state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The camera being choreographed.
    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The plan this choreography was built from.
    #[inline]
    #[must_use]
    pub fn plan(&self) -> &ShowcasePlan {
        &self.plan
    }

    /// Accumulated scroll travel.
    #[inline]
    #[must_use]
    pub fn scroll(&self) -> f64 {
        self.dolly.accumulated()
    }

    /// Whether discovery has permanently ended the scroll phase.
    #[inline]
    #[must_use]
    pub fn scroll_retired(&self) -> bool {
        self.scroll_retired
    }

    /// Index of the currently focused hotspot, if parked on one.
    #[inline]
    #[must_use]
    pub fn focused_hotspot(&self) -> Option<usize> {
        self.focused
    }

    /// Take every overlay command queued since the last call, oldest
    /// first.
    pub fn take_ui_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.ui_queue)
    }

    // ── Command handlers ────────────────────────────────────────────

    /// Wheel ticks drive the dolly while the reveal phase is live. In
    /// every other situation they are inert, not an error: after
    /// discovery the wheel simply no longer means anything.
    fn handle_wheel(&mut self, delta: f32) {
        if self.scroll_retired || !self.state.accepts_scroll() {
            return;
        }

        let was_awaiting = self.state == InteractionState::AwaitingSelection;
        let _ = self.dolly.advance(delta);
        self.camera.eye = self.dolly.eye();

        let next = if self.dolly.at_max() {
            InteractionState::AwaitingSelection
        } else if self.dolly.at_rest() {
            InteractionState::Intro
        } else {
            InteractionState::Revealing
        };

        // Level-triggered threshold: the intro pair appears whenever
        // full travel is reached and withdraws whenever the dolly backs
        // off, however many times that happens.
        let is_awaiting = next == InteractionState::AwaitingSelection;
        if is_awaiting && !was_awaiting {
            self.ui_queue.push(UiCommand::ShowIntro);
        }
        if was_awaiting && !is_awaiting {
            self.ui_queue.push(UiCommand::HideIntro);
        }
        self.set_state(next);
    }

    fn handle_discover(&mut self, now: Instant) -> Result<(), Rejection> {
        if self.scroll_retired || self.state != InteractionState::AwaitingSelection {
            return Err(Rejection::StateForbids(self.state));
        }

        self.request_transition(
            TransitionRequest {
                target: self.plan.overview.clone(),
                duration: self.transitions.discover(),
                easing: self.transitions.easing,
                goal: TransitionGoal::RevealHotspots,
            },
            now,
        )?;

        // Only after the move was accepted: scroll is done for good and
        // the intro never comes back.
        self.scroll_retired = true;
        self.ui_queue.push(UiCommand::DismissIntro);
        Ok(())
    }

    fn handle_select(&mut self, index: usize, now: Instant) -> Result<(), Rejection> {
        if self.state != InteractionState::AwaitingSelection || !self.scroll_retired {
            return Err(Rejection::StateForbids(self.state));
        }
        let Some(hotspot) = self.plan.hotspots.get(index) else {
            return Err(Rejection::UnknownHotspot(index));
        };
        let target = hotspot.viewpoint.clone();

        // Record the pose being left so Back can restore it exactly.
        let origin = Viewpoint {
            position: self.camera.eye,
            look_at: match self.look {
                LookTarget::Fixed(point) => Some(point),
                LookTarget::Subject => None,
            },
        };

        self.request_transition(
            TransitionRequest {
                target,
                duration: self.transitions.focus(),
                easing: self.transitions.easing,
                goal: TransitionGoal::Focus { hotspot: index },
            },
            now,
        )?;

        self.return_pose = Some(origin);
        self.ui_queue.push(UiCommand::BeginTransition);
        Ok(())
    }

    fn handle_back(&mut self, now: Instant) -> Result<(), Rejection> {
        if self.state != InteractionState::Focused {
            return Err(Rejection::StateForbids(self.state));
        }
        // Focused always records where it came from; refuse rather than
        // guess if that invariant ever breaks.
        let Some(target) = self.return_pose.clone() else {
            return Err(Rejection::StateForbids(self.state));
        };

        self.request_transition(
            TransitionRequest {
                target,
                duration: self.transitions.return_move(),
                easing: self.transitions.easing,
                goal: TransitionGoal::Return,
            },
            now,
        )?;

        self.ui_queue.push(UiCommand::BeginTransition);
        Ok(())
    }

    // ── Internals ───────────────────────────────────────────────────

    fn finish_transition(&mut self, goal: TransitionGoal) {
        match goal {
            TransitionGoal::RevealHotspots => {
                self.set_state(InteractionState::AwaitingSelection);
                self.ui_queue.push(UiCommand::EnterSelection);
            }
            TransitionGoal::Focus { hotspot } => {
                self.set_state(InteractionState::Focused);
                self.focused = Some(hotspot);
                let detail = self
                    .plan
                    .hotspots
                    .get(hotspot)
                    .map(|h| h.detail.clone())
                    .unwrap_or_default();
                self.ui_queue.push(UiCommand::EnterFocus { hotspot, detail });
            }
            TransitionGoal::Return => {
                self.set_state(InteractionState::AwaitingSelection);
                self.focused = None;
                self.return_pose = None;
                self.ui_queue.push(UiCommand::EnterSelection);
            }
        }
    }

    fn look_point(&self) -> Vec3 {
        match self.look {
            LookTarget::Fixed(point) => point,
            LookTarget::Subject => self
                .subject
                .as_ref()
                .map_or(FALLBACK_LOOK_AT, |s| s.position),
        }
    }

    fn set_state(&mut self, next: InteractionState) {
        if next != self.state {
            log::debug!("interaction state {} -> {next}", self.state);
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> SubjectHandle {
        SubjectHandle {
            label: "bmw".to_owned(),
            position: Vec3::new(0.0, 0.35, 0.0),
            size_bytes: 1024,
        }
    }

    fn rigged() -> (CameraChoreographer, Instant) {
        let choreographer = CameraChoreographer::new(
            ShowcasePlan::default(),
            &Options::default(),
            16.0 / 9.0,
        );
        (choreographer, Instant::now())
    }

    /// Scroll to full travel and clear the queued intro command.
    fn reveal(ch: &mut CameraChoreographer, now: Instant) {
        assert!(ch.execute(ShowcaseCommand::Wheel { delta: 700.0 }, now).is_ok());
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
    }

    /// Reveal, discover, and land at the overview. Returns the time at
    /// which the overview was reached.
    fn discovered(ch: &mut CameraChoreographer, now: Instant) -> Instant {
        ch.attach_subject(subject());
        reveal(ch, now);
        ch.execute(ShowcaseCommand::ActivateDiscover, now).unwrap();
        let landed = now + ch.transitions.discover();
        assert!(!ch.advance(landed));
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        landed
    }

    #[test]
    fn starts_at_the_landing_pose() {
        let (ch, _) = rigged();
        assert_eq!(ch.state(), InteractionState::Intro);
        assert_eq!(ch.camera().eye, Vec3::new(0.0, 0.8, 2.4));
        assert_eq!(ch.scroll(), 0.0);
        assert!(!ch.scroll_retired());
    }

    #[test]
    fn wheel_moves_camera_deterministically() {
        let (mut ch, now) = rigged();
        ch.execute(ShowcaseCommand::Wheel { delta: 350.0 }, now).unwrap();
        assert_eq!(ch.state(), InteractionState::Revealing);
        let eye = ch.camera().eye;
        assert!((eye.z - 5.9).abs() < 1e-5);
        assert!((eye.y - 1.8).abs() < 1e-5);
        // The reveal keeps aiming at the plan's fixed look-at.
        let _ = ch.advance(now);
        assert_eq!(ch.camera().target, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn threshold_is_level_triggered_in_both_directions() {
        let (mut ch, now) = rigged();

        reveal(&mut ch, now);
        assert_eq!(ch.take_ui_commands(), vec![UiCommand::ShowIntro]);

        // Holding at max produces no repeat announcements.
        ch.execute(ShowcaseCommand::Wheel { delta: 50.0 }, now).unwrap();
        assert_eq!(ch.scroll(), 7.0);
        assert!(ch.take_ui_commands().is_empty());

        // Backing off withdraws the intro, reaching max again re-shows it.
        ch.execute(ShowcaseCommand::Wheel { delta: -10.0 }, now).unwrap();
        assert_eq!(ch.state(), InteractionState::Revealing);
        assert_eq!(ch.take_ui_commands(), vec![UiCommand::HideIntro]);

        ch.execute(ShowcaseCommand::Wheel { delta: 10.0 }, now).unwrap();
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        assert_eq!(ch.take_ui_commands(), vec![UiCommand::ShowIntro]);
    }

    #[test]
    fn scrolling_back_to_zero_returns_to_intro() {
        let (mut ch, now) = rigged();
        ch.execute(ShowcaseCommand::Wheel { delta: 200.0 }, now).unwrap();
        ch.execute(ShowcaseCommand::Wheel { delta: -200.0 }, now).unwrap();
        assert_eq!(ch.state(), InteractionState::Intro);
        assert_eq!(ch.camera().eye, Vec3::new(0.0, 0.8, 2.4));
    }

    #[test]
    fn transitions_are_refused_until_the_subject_resolves() {
        let (mut ch, now) = rigged();
        reveal(&mut ch, now);
        let _ = ch.take_ui_commands();

        let before = ch.camera().eye;
        let result = ch.execute(ShowcaseCommand::ActivateDiscover, now);
        assert_eq!(result, Err(Rejection::SubjectNotReady));

        // Nothing moved, nothing was torn down.
        assert_eq!(ch.camera().eye, before);
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        assert!(!ch.scroll_retired());
        assert!(ch.take_ui_commands().is_empty());
    }

    #[test]
    fn discover_retires_scroll_and_dismisses_the_intro() {
        let (mut ch, now) = rigged();
        ch.attach_subject(subject());
        reveal(&mut ch, now);
        let _ = ch.take_ui_commands();

        ch.execute(ShowcaseCommand::ActivateDiscover, now).unwrap();
        assert_eq!(ch.state(), InteractionState::Transitioning);
        assert!(ch.scroll_retired());
        assert_eq!(ch.take_ui_commands(), vec![UiCommand::DismissIntro]);

        // Wheel input is inert from now on, in every state.
        let mid = now + Duration::from_millis(500);
        let _ = ch.advance(mid);
        let eye = ch.camera().eye;
        ch.execute(ShowcaseCommand::Wheel { delta: 300.0 }, mid).unwrap();
        assert_eq!(ch.camera().eye, eye);
        assert_eq!(ch.scroll(), 7.0);
    }

    #[test]
    fn discover_lands_at_the_overview_and_presents_hotspots() {
        let (mut ch, now) = rigged();
        ch.attach_subject(subject());
        reveal(&mut ch, now);
        let _ = ch.take_ui_commands();
        ch.execute(ShowcaseCommand::ActivateDiscover, now).unwrap();

        // Mid-flight the camera is between the poses and aims at the
        // live subject.
        let mid = now + Duration::from_millis(1000);
        assert!(ch.advance(mid));
        assert_eq!(ch.state(), InteractionState::Transitioning);
        assert_eq!(ch.camera().target, Vec3::new(0.0, 0.35, 0.0));

        // Arrival fires exactly once, synchronously with the tick.
        let landed = now + ch.transitions.discover();
        assert!(!ch.advance(landed));
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        assert_eq!(ch.camera().eye, Vec3::new(-4.5, 1.6, 4.5));
        assert_eq!(ch.take_ui_commands(), vec![UiCommand::EnterSelection]);

        // Later ticks do not re-fire the arrival.
        assert!(!ch.advance(landed + Duration::from_secs(1)));
        assert!(ch.take_ui_commands().is_empty());
    }

    #[test]
    fn selection_round_trip_restores_the_recorded_pose() {
        let (mut ch, mut now) = rigged();
        now = discovered(&mut ch, now);
        let _ = ch.take_ui_commands();
        let overview_eye = ch.camera().eye;

        ch.execute(ShowcaseCommand::SelectHotspot { index: 1 }, now).unwrap();
        assert_eq!(ch.state(), InteractionState::Transitioning);
        assert_eq!(ch.take_ui_commands(), vec![UiCommand::BeginTransition]);

        now += ch.transitions.focus();
        let _ = ch.advance(now);
        assert_eq!(ch.state(), InteractionState::Focused);
        assert_eq!(ch.focused_hotspot(), Some(1));
        assert_eq!(ch.camera().eye, Vec3::new(-1.3, 1.25, 0.6));
        match ch.take_ui_commands().as_slice() {
            [UiCommand::EnterFocus { hotspot: 1, detail }] => {
                assert!(detail.contains("Habitacle"));
            }
            other => panic!("unexpected commands: {other:?}"),
        }

        ch.execute(ShowcaseCommand::ActivateBack, now).unwrap();
        assert_eq!(ch.state(), InteractionState::Returning);

        now += ch.transitions.return_move();
        let _ = ch.advance(now);
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        assert_eq!(ch.focused_hotspot(), None);
        // Back lands exactly where the selection began.
        assert!((ch.camera().eye - overview_eye).length() < 1e-4);
    }

    #[test]
    fn preemption_redirects_from_the_interpolated_position() {
        let (mut ch, mut now) = rigged();
        now = discovered(&mut ch, now);
        let _ = ch.take_ui_commands();

        ch.execute(ShowcaseCommand::SelectHotspot { index: 0 }, now).unwrap();
        let mid = now + Duration::from_millis(400);
        let _ = ch.advance(mid);
        let mid_eye = ch.camera().eye;

        // Redirect toward hotspot 2 mid-glide via the public request API.
        let target = ch.plan().hotspots[2].viewpoint.clone();
        ch.request_transition(
            TransitionRequest {
                target: target.clone(),
                duration: Duration::from_millis(800),
                easing: EasingFunction::DEFAULT,
                goal: TransitionGoal::Focus { hotspot: 2 },
            },
            mid,
        )
        .unwrap();

        // No snap: the new glide starts from the interpolated position.
        let _ = ch.advance(mid);
        assert!((ch.camera().eye - mid_eye).length() < 1e-4);

        // Only the second move's arrival ever fires.
        now = mid + Duration::from_millis(800);
        let _ = ch.advance(now);
        assert_eq!(ch.camera().eye, target.position);
        assert_eq!(ch.focused_hotspot(), Some(2));
        let commands = ch.take_ui_commands();
        let arrivals = commands
            .iter()
            .filter(|c| matches!(c, UiCommand::EnterFocus { .. }))
            .count();
        assert_eq!(arrivals, 1);
        assert!(commands
            .iter()
            .all(|c| !matches!(c, UiCommand::EnterFocus { hotspot: 0, .. })));
    }

    #[test]
    fn unknown_hotspot_is_refused_without_side_effects() {
        let (mut ch, mut now) = rigged();
        now = discovered(&mut ch, now);
        let _ = ch.take_ui_commands();

        let result = ch.execute(ShowcaseCommand::SelectHotspot { index: 9 }, now);
        assert_eq!(result, Err(Rejection::UnknownHotspot(9)));
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        assert!(ch.take_ui_commands().is_empty());
    }

    #[test]
    fn activations_outside_their_states_are_refused() {
        let (mut ch, now) = rigged();
        ch.attach_subject(subject());

        // Back before anything is focused.
        assert!(matches!(
            ch.execute(ShowcaseCommand::ActivateBack, now),
            Err(Rejection::StateForbids(InteractionState::Intro))
        ));
        // Hotspot selection before discovery.
        reveal(&mut ch, now);
        assert!(matches!(
            ch.execute(ShowcaseCommand::SelectHotspot { index: 0 }, now),
            Err(Rejection::StateForbids(_))
        ));
        // Discover twice: the second arrives in Transitioning.
        ch.execute(ShowcaseCommand::ActivateDiscover, now).unwrap();
        assert!(matches!(
            ch.execute(ShowcaseCommand::ActivateDiscover, now),
            Err(Rejection::StateForbids(InteractionState::Transitioning))
        ));
    }

    #[test]
    fn tracking_look_follows_a_moving_subject() {
        let (mut ch, mut now) = rigged();
        now = discovered(&mut ch, now);
        assert_eq!(ch.camera().target, Vec3::new(0.0, 0.35, 0.0));

        if let Some(subject) = ch.subject_mut() {
            subject.position = Vec3::new(0.5, 0.35, -0.25);
        }
        let _ = ch.advance(now);
        assert_eq!(ch.camera().target, Vec3::new(0.5, 0.35, -0.25));
    }

    #[test]
    fn resize_updates_the_aspect_in_any_state() {
        let (mut ch, now) = rigged();
        ch.execute(ShowcaseCommand::Resize { aspect: 2.0 }, now).unwrap();
        assert_eq!(ch.camera().aspect, 2.0);
    }

    #[test]
    fn zero_duration_transition_lands_within_one_tick() {
        let (mut ch, now) = rigged();
        ch.attach_subject(subject());
        reveal(&mut ch, now);
        let _ = ch.take_ui_commands();

        ch.request_transition(
            TransitionRequest {
                target: Viewpoint::tracking(Vec3::new(-4.5, 1.6, 4.5)),
                duration: Duration::ZERO,
                easing: EasingFunction::Linear,
                goal: TransitionGoal::RevealHotspots,
            },
            now,
        )
        .unwrap();

        assert!(!ch.advance(now));
        assert_eq!(ch.state(), InteractionState::AwaitingSelection);
        assert_eq!(ch.camera().eye, Vec3::new(-4.5, 1.6, 4.5));
    }
}
