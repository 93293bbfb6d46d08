// -- Lint policy ---------------------------------------------------------
// Crate-wide lints; test allowances live in clippy.toml, the rest of
// the policy in [workspace.lints] in Cargo.toml.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scripted-camera product showcase engine built on wgpu.
//!
//! Vitrine drives the "scroll in, pick a detail, zoom, come back" camera
//! choreography of an interactive 3D product page. A declarative
//! [`ShowcasePlan`] names the subject model, the viewpoints, and the
//! hotspots; the [`choreography::CameraChoreographer`] turns wheel input
//! and overlay clicks into eased camera moves, refusing anything the
//! current interaction state forbids.
//!
//! # Key entry points
//!
//! - [`Showcase`] - one running showcase: choreography, overlay, loads,
//!   renderer
//! - [`ShowcasePlan`] - the declarative scene description (TOML)
//! - [`choreography::CameraChoreographer`] - the interaction state
//!   machine and camera driver
//! - [`options::Options`] - runtime tuning (camera, scroll, transitions,
//!   loader)
//!
//! # Architecture
//!
//! Asset bytes stream on background loader threads and arrive as polled
//! [`assets::LoadEvent`]s; nothing in the choreography blocks on I/O.
//! Rendering hides behind the [`render::FrameRenderer`] trait, so the
//! whole interaction flow runs headless under test via
//! [`render::NullRenderer`], while the `viewer` feature supplies a
//! winit/wgpu window.

pub mod assets;
pub mod camera;
pub mod choreography;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod showcase;
pub mod tween;
pub mod ui;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::VitrineError;
pub use showcase::{Showcase, ShowcaseCommand, ShowcasePlan};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
