//! Error types for the showcase engine.

use std::fmt;

/// Top-level error type.
#[derive(Debug)]
pub enum VitrineError {
    /// Filesystem I/O failure.
    Io(std::io::Error),
    /// A showcase plan file could not be parsed.
    PlanParse(String),
    /// An options file could not be parsed or serialized.
    OptionsParse(String),
    /// The asset loader worker thread could not be spawned.
    ThreadSpawn(std::io::Error),
    /// Windowing or GPU surface setup failure.
    Viewer(String),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::PlanParse(msg) => {
                write!(f, "showcase plan parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ThreadSpawn(err) => {
                write!(f, "failed to spawn thread: {err}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) | Self::ThreadSpawn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
