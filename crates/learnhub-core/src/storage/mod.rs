//! Storage abstractions for the Learning Hub.
//!
//! Defines traits for the key/value settings store and the object store
//! used for video uploads. Implementations live in learnhub-infra.

pub mod memory;
pub mod object_store;
pub mod settings_store;

pub use object_store::{BoxObjectStore, ObjectStore};
pub use settings_store::{BoxSettingsStore, SettingsStore};
