//! Chat proxy flow: validate, enrich the system prompt, forward, relay.

pub mod service;

pub use service::{ChatProxyService, ProxyConfig};
