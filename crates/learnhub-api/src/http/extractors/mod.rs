//! Custom request extractors.

pub mod admin;
