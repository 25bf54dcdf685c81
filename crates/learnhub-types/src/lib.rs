//! Shared domain types for the Learning Hub chat proxy.
//!
//! Chat messages and the gateway payload, the site-settings record with its
//! defaults, configuration file shapes, and the error taxonomy shared by every
//! layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod settings;
