//! Logging and trace export setup for the Learning Hub.

pub mod genai_attrs;
pub mod tracing_setup;
