//! Background asset loading with progress events.
//!
//! Loads run on a named worker thread; the main loop stays responsive and
//! observes each load through a [`LoadTicket`] it polls once per tick.
//! Every ticket ends with exactly one terminal event (`Loaded`, `Failed`,
//! or `Cancelled`), and `Progress` values never decrease.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use glam::Vec3;
use web_time::Duration;

use crate::error::VitrineError;

/// Streaming read granularity. One progress event per chunk.
const CHUNK_SIZE: usize = 64 * 1024;

/// A loaded subject model, ready to be framed by the choreography.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectHandle {
    /// Display name derived from the model file stem.
    pub label: String,
    /// World-space position of the subject. Starts at the origin; the
    /// showcase may nudge it and tracking viewpoints will follow.
    pub position: Vec3,
    /// Size of the model file in bytes.
    pub size_bytes: u64,
}

/// A loaded environment map.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentHandle {
    /// Source file the environment was read from.
    pub path: PathBuf,
    /// Size of the environment file in bytes.
    pub size_bytes: u64,
}

/// One observation from an in-flight load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent<T> {
    /// Fraction of the file read so far, in [0, 1].
    Progress(f32),
    /// The asset finished loading. Terminal.
    Loaded(T),
    /// The load failed; the reason is human-readable. Terminal.
    Failed(String),
    /// The load was cancelled before completion. Terminal.
    Cancelled,
}

/// Handle to one in-flight load.
///
/// Dropping the ticket detaches the worker; it finishes (or notices the
/// cancellation flag) and its events go nowhere.
#[derive(Debug)]
pub struct LoadTicket<T> {
    events: mpsc::Receiver<LoadEvent<T>>,
    cancel: Arc<AtomicBool>,
}

impl<T> LoadTicket<T> {
    /// Non-blocking poll for the next event.
    #[must_use]
    pub fn poll(&self) -> Option<LoadEvent<T>> {
        self.events.try_recv().ok()
    }

    /// Block up to `timeout` for the next event. Intended for headless
    /// callers and tests; the viewer polls instead.
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<LoadEvent<T>> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Ask the worker to stop. The worker checks the flag between chunks
    /// and answers with a terminal `Cancelled` event.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Start loading a subject model in the background.
///
/// I/O problems (missing file, empty file, read errors) surface as a terminal
/// [`LoadEvent::Failed`] on the ticket, never as a panic; only the thread
/// spawn itself can fail here.
pub fn load_model(path: &Path) -> Result<LoadTicket<SubjectHandle>, VitrineError> {
    let label = path
        .file_stem()
        .map_or_else(|| "subject".to_owned(), |s| s.to_string_lossy().into_owned());
    spawn_worker("model-loader", path, move |size_bytes| SubjectHandle {
        label,
        position: Vec3::ZERO,
        size_bytes,
    })
}

/// Start loading an environment map in the background.
pub fn load_environment(path: &Path) -> Result<LoadTicket<EnvironmentHandle>, VitrineError> {
    let owned = path.to_path_buf();
    spawn_worker("environment-loader", path, move |size_bytes| {
        EnvironmentHandle {
            path: owned,
            size_bytes,
        }
    })
}

/// Spawn a streaming worker that reads `path` and finishes by mapping the
/// byte count into an asset handle.
fn spawn_worker<T, F>(
    thread_name: &str,
    path: &Path,
    finish: F,
) -> Result<LoadTicket<T>, VitrineError>
where
    T: Send + 'static,
    F: FnOnce(u64) -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let path = path.to_path_buf();

    let _ = std::thread::Builder::new()
        .name(thread_name.into())
        .spawn(move || {
            let event = match stream_file(&path, &flag, &tx) {
                StreamOutcome::Complete(bytes) => LoadEvent::Loaded(finish(bytes)),
                StreamOutcome::Cancelled => LoadEvent::Cancelled,
                StreamOutcome::Failed(reason) => LoadEvent::Failed(reason),
            };
            // Receiver may already be gone; that is fine.
            let _ = tx.send(event);
        })
        .map_err(VitrineError::ThreadSpawn)?;

    Ok(LoadTicket { events: rx, cancel })
}

enum StreamOutcome {
    Complete(u64),
    Cancelled,
    Failed(String),
}

/// Read the file in chunks, reporting progress after each one.
fn stream_file<T>(
    path: &Path,
    cancel: &AtomicBool,
    events: &mpsc::Sender<LoadEvent<T>>,
) -> StreamOutcome {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return StreamOutcome::Failed(format!("{}: {e}", path.display())),
    };
    let total = match file.metadata() {
        Ok(m) => m.len(),
        Err(e) => return StreamOutcome::Failed(format!("{}: {e}", path.display())),
    };
    if total == 0 {
        return StreamOutcome::Failed(format!("{}: file is empty", path.display()));
    }

    let mut buffer = vec![0_u8; CHUNK_SIZE];
    let mut read_total: u64 = 0;
    loop {
        if cancel.load(Ordering::Relaxed) {
            return StreamOutcome::Cancelled;
        }
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                read_total += n as u64;
                let fraction = (read_total as f64 / total as f64).min(1.0) as f32;
                let _ = events.send(LoadEvent::Progress(fraction));
            }
            Err(e) => {
                return StreamOutcome::Failed(format!("{}: {e}", path.display()));
            }
        }
    }
    StreamOutcome::Complete(read_total)
}
