//! Declarative description of one showcase: subject, viewpoints, hotspots.
//!
//! A [`ShowcasePlan`] is pure data. It says where the camera starts, where
//! discovery takes it, which hotspots exist and what they show; the
//! choreographer and overlay read from it but never write back. Plans
//! serialize to TOML so a showcase can be authored without recompiling.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// A named camera pose.
///
/// `look_at: None` means the pose tracks the live subject position each
/// frame instead of a fixed point, so a subject nudged at runtime stays
/// framed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    /// Eye position in world space.
    pub position: Vec3,
    /// Fixed look-at point, or `None` to track the subject.
    #[serde(default)]
    pub look_at: Option<Vec3>,
}

impl Viewpoint {
    /// Pose with a fixed look-at point.
    #[must_use]
    pub fn fixed(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at: Some(look_at),
        }
    }

    /// Pose that keeps framing the live subject.
    #[must_use]
    pub fn tracking(position: Vec3) -> Self {
        Self {
            position,
            look_at: None,
        }
    }
}

/// One selectable detail of the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Caption shown on the hotspot's overlay button.
    pub label: String,
    /// Detail text shown while this hotspot is focused.
    pub detail: String,
    /// Button anchor in normalized screen coordinates ([0,1] per axis,
    /// origin at the top-left).
    pub anchor: Vec2,
    /// Camera pose framing this detail.
    pub viewpoint: Viewpoint,
}

/// Point light illuminating the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    /// Light position in world space.
    pub position: Vec3,
    /// Light intensity in the renderer's arbitrary units.
    pub intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 0.0),
            intensity: 100.0,
        }
    }
}

/// Everything one showcase needs: content strings, asset paths, lighting,
/// and the camera poses the choreography moves between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcasePlan {
    /// Product title shown during the intro.
    pub title: String,
    /// Caption of the discover call-to-action button.
    pub cta_label: String,
    /// Caption of the back button shown while focused.
    pub back_label: String,
    /// Path to the subject model file.
    pub model_path: String,
    /// Optional path to an environment map.
    pub environment_path: Option<String>,
    /// Clear color behind the subject, linear RGB.
    pub background: [f32; 3],
    /// Studio light above the subject.
    pub light: PointLight,
    /// Landing pose; its fixed look-at anchors the whole reveal.
    pub initial: Viewpoint,
    /// Overview pose the discover move glides to.
    pub overview: Viewpoint,
    /// Selectable details, in overlay-button order.
    pub hotspots: Vec<Hotspot>,
}

impl Default for ShowcasePlan {
    fn default() -> Self {
        Self {
            title: "BMW M5 Touring".to_owned(),
            cta_label: "Découvrir".to_owned(),
            back_label: "Retour".to_owned(),
            model_path: "assets/models/bmw.glb".to_owned(),
            environment_path: None,
            background: [0.059, 0.059, 0.059],
            light: PointLight::default(),
            initial: Viewpoint::fixed(
                Vec3::new(0.0, 0.8, 2.4),
                Vec3::new(0.0, 0.5, 0.0),
            ),
            overview: Viewpoint::tracking(Vec3::new(-4.5, 1.6, 4.5)),
            hotspots: vec![
                Hotspot {
                    label: "Jantes".to_owned(),
                    detail: "Jantes forgées 20 pouces à double rayon, \
                             freins carbone-céramique en option."
                        .to_owned(),
                    anchor: Vec2::new(0.28, 0.62),
                    viewpoint: Viewpoint::fixed(
                        Vec3::new(-2.1, 0.6, 1.9),
                        Vec3::new(-0.85, 0.35, 1.45),
                    ),
                },
                Hotspot {
                    label: "Habitacle".to_owned(),
                    detail: "Habitacle M avec affichage tête haute et \
                             sellerie Merino étendue."
                        .to_owned(),
                    anchor: Vec2::new(0.52, 0.38),
                    viewpoint: Viewpoint::fixed(
                        Vec3::new(-1.3, 1.25, 0.6),
                        Vec3::new(0.0, 0.9, 0.1),
                    ),
                },
                Hotspot {
                    label: "Coffre".to_owned(),
                    detail: "Coffre de 500 litres, hayon à ouverture \
                             séparée de la lunette."
                        .to_owned(),
                    anchor: Vec2::new(0.74, 0.52),
                    viewpoint: Viewpoint::fixed(
                        Vec3::new(0.4, 1.1, -3.2),
                        Vec3::new(0.0, 0.7, -1.6),
                    ),
                },
            ],
        }
    }
}

impl ShowcasePlan {
    /// Load a plan from a TOML file. Missing fields use the demo defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content).map_err(|e| VitrineError::PlanParse(e.to_string()))
    }

    /// Save a plan to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::PlanParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_round_trips_through_toml() {
        let plan = ShowcasePlan::default();
        let text = toml::to_string_pretty(&plan).unwrap();
        let parsed: ShowcasePlan = toml::from_str(&text).unwrap();
        assert_eq!(plan, parsed);
    }

    #[test]
    fn partial_plan_keeps_demo_defaults() {
        let toml_str = r#"
title = "Roadster Mk II"
model_path = "assets/models/roadster.glb"
"#;
        let plan: ShowcasePlan = toml::from_str(toml_str).unwrap();
        assert_eq!(plan.title, "Roadster Mk II");
        assert_eq!(plan.model_path, "assets/models/roadster.glb");
        // Untouched tables fall back to the demo content.
        assert_eq!(plan.cta_label, "Découvrir");
        assert_eq!(plan.hotspots.len(), 3);
        assert_eq!(plan.light.intensity, 100.0);
    }

    #[test]
    fn initial_pose_is_anchored_overview_tracks() {
        let plan = ShowcasePlan::default();
        assert!(plan.initial.look_at.is_some());
        assert!(plan.overview.look_at.is_none());
    }

    #[test]
    fn hotspot_anchors_are_normalized() {
        for hotspot in &ShowcasePlan::default().hotspots {
            assert!((0.0..=1.0).contains(&hotspot.anchor.x));
            assert!((0.0..=1.0).contains(&hotspot.anchor.y));
        }
    }
}
