//! Overlay panel registry.
//!
//! Panels are dumb: a visibility flag, a caption, a cursor hint, and a
//! screen anchor. All choreography-driven changes arrive as
//! [`UiCommand`]s; nothing here inspects the interaction state directly,
//! which keeps overlay visibility a pure function of the commands the
//! choreographer has emitted.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::UiCommand;
use crate::showcase::plan::ShowcasePlan;

/// Half extents of a clickable overlay button in normalized screen
/// coordinates.
const BUTTON_HALF_WIDTH: f32 = 0.09;
const BUTTON_HALF_HEIGHT: f32 = 0.035;

/// Identity of an overlay panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelId {
    /// Product title, intro phase only.
    Title,
    /// Discover call-to-action button, intro phase only.
    DiscoverCta,
    /// One hotspot selection button, by registry index.
    HotspotButton(usize),
    /// Back button shown while focused.
    BackButton,
    /// Hotspot detail text shown while focused.
    InfoText,
}

/// Pointer shape a panel requests while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Plain arrow.
    #[default]
    Default,
    /// Hand cursor signalling a clickable element.
    Pointer,
}

/// State of a single overlay panel.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Whether the panel is currently shown.
    pub visible: bool,
    /// Caption or body text.
    pub text: String,
    /// Pointer shape requested while hovered.
    pub cursor: CursorHint,
    /// Anchor in normalized screen coordinates, origin top-left.
    pub anchor: Vec2,
    /// Whether the panel reacts to clicks.
    pub interactive: bool,
}

/// The full overlay: every panel of the showcase, addressable by id.
#[derive(Debug, Clone)]
pub struct OverlayPanels {
    panels: FxHashMap<PanelId, Panel>,
    hotspot_count: usize,
}

impl OverlayPanels {
    /// Build the overlay for a plan. Every panel starts hidden; the first
    /// [`UiCommand::ShowIntro`] brings the intro pair up.
    #[must_use]
    pub fn from_plan(plan: &ShowcasePlan) -> Self {
        let mut panels = FxHashMap::default();

        let _ = panels.insert(
            PanelId::Title,
            Panel {
                visible: false,
                text: plan.title.clone(),
                cursor: CursorHint::Default,
                anchor: Vec2::new(0.5, 0.12),
                interactive: false,
            },
        );
        let _ = panels.insert(
            PanelId::DiscoverCta,
            Panel {
                visible: false,
                text: plan.cta_label.clone(),
                cursor: CursorHint::Pointer,
                anchor: Vec2::new(0.5, 0.21),
                interactive: true,
            },
        );
        let _ = panels.insert(
            PanelId::BackButton,
            Panel {
                visible: false,
                text: plan.back_label.clone(),
                cursor: CursorHint::Pointer,
                anchor: Vec2::new(0.07, 0.08),
                interactive: true,
            },
        );
        let _ = panels.insert(
            PanelId::InfoText,
            Panel {
                visible: false,
                text: String::new(),
                cursor: CursorHint::Default,
                anchor: Vec2::new(0.5, 0.86),
                interactive: false,
            },
        );
        for (index, hotspot) in plan.hotspots.iter().enumerate() {
            let _ = panels.insert(
                PanelId::HotspotButton(index),
                Panel {
                    visible: false,
                    text: hotspot.label.clone(),
                    cursor: CursorHint::Pointer,
                    anchor: hotspot.anchor,
                    interactive: true,
                },
            );
        }

        Self {
            panels,
            hotspot_count: plan.hotspots.len(),
        }
    }

    /// React to one choreography moment.
    pub fn apply(&mut self, command: &UiCommand) {
        match command {
            UiCommand::ShowIntro => {
                self.set_visible(PanelId::Title, true);
                self.set_visible(PanelId::DiscoverCta, true);
            }
            UiCommand::HideIntro | UiCommand::DismissIntro => {
                self.set_visible(PanelId::Title, false);
                self.set_visible(PanelId::DiscoverCta, false);
            }
            UiCommand::BeginTransition => {
                for index in 0..self.hotspot_count {
                    self.set_visible(PanelId::HotspotButton(index), false);
                }
                self.set_visible(PanelId::BackButton, false);
                self.set_visible(PanelId::InfoText, false);
            }
            UiCommand::EnterSelection => {
                for index in 0..self.hotspot_count {
                    self.set_visible(PanelId::HotspotButton(index), true);
                }
                self.set_visible(PanelId::BackButton, false);
                self.set_visible(PanelId::InfoText, false);
            }
            UiCommand::EnterFocus { detail, .. } => {
                for index in 0..self.hotspot_count {
                    self.set_visible(PanelId::HotspotButton(index), false);
                }
                self.set_text(PanelId::InfoText, detail);
                self.set_visible(PanelId::InfoText, true);
                self.set_visible(PanelId::BackButton, true);
            }
        }
    }

    /// Show or hide one panel.
    pub fn set_visible(&mut self, id: PanelId, visible: bool) {
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.visible = visible;
        }
    }

    /// Replace one panel's text.
    pub fn set_text(&mut self, id: PanelId, text: &str) {
        if let Some(panel) = self.panels.get_mut(&id) {
            text.clone_into(&mut panel.text);
        }
    }

    /// Override one panel's hover cursor.
    pub fn set_cursor(&mut self, id: PanelId, cursor: CursorHint) {
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.cursor = cursor;
        }
    }

    /// Whether a panel is currently shown.
    #[must_use]
    pub fn is_visible(&self, id: PanelId) -> bool {
        self.panels.get(&id).is_some_and(|p| p.visible)
    }

    /// A panel's current text, if the panel exists.
    #[must_use]
    pub fn text(&self, id: PanelId) -> Option<&str> {
        self.panels.get(&id).map(|p| p.text.as_str())
    }

    /// Ids of all currently visible panels, in stable order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self
            .panels
            .iter()
            .filter(|(_, p)| p.visible)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Topmost visible interactive panel under a normalized screen
    /// position, if any.
    ///
    /// Ties (overlapping buttons) resolve to the closest anchor so the
    /// result does not depend on map iteration order.
    #[must_use]
    pub fn hit_test(&self, position: Vec2) -> Option<PanelId> {
        self.panels
            .iter()
            .filter(|(_, p)| p.visible && p.interactive)
            .filter(|(_, p)| {
                let d = (position - p.anchor).abs();
                d.x <= BUTTON_HALF_WIDTH && d.y <= BUTTON_HALF_HEIGHT
            })
            .min_by(|(_, a), (_, b)| {
                let da = (position - a.anchor).length_squared();
                let db = (position - b.anchor).length_squared();
                da.total_cmp(&db)
            })
            .map(|(id, _)| *id)
    }

    /// Cursor hint for the panel under a normalized screen position.
    #[must_use]
    pub fn cursor_at(&self, position: Vec2) -> CursorHint {
        self.hit_test(position)
            .and_then(|id| self.panels.get(&id))
            .map_or(CursorHint::Default, |p| p.cursor)
    }
}
