//! Asset loading off the main thread.

mod loader;

pub use loader::{
    load_environment, load_model, EnvironmentHandle, LoadEvent, LoadTicket,
    SubjectHandle,
};
