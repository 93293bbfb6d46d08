//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera projection, scroll-dolly feel, transition
//! timing, loader policy) are consolidated here. Options serialize to/from
//! TOML; every sub-struct uses `#[serde(default)]` so a preset file only
//! has to mention the tables it overrides.

mod camera;
mod loader;
mod scroll;
mod transitions;

use std::path::Path;

pub use camera::CameraOptions;
pub use loader::LoaderOptions;
pub use scroll::ScrollOptions;
pub use transitions::TransitionOptions;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Scroll-dolly tuning.
    pub scroll: ScrollOptions,
    /// Transition durations and easing.
    pub transitions: TransitionOptions,
    /// Asset loading policy.
    pub loader: LoaderOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content).map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }
}
