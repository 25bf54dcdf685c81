//! Site settings and promotional video management.

pub mod service;

pub use service::SiteService;
