//! Prompt composition, chat proxy flow, and collaborator ports for the
//! Learning Hub.
//!
//! This crate defines the "ports" (store and gateway traits) that the
//! infrastructure layer implements. It depends only on `learnhub-types` --
//! never on `learnhub-infra` or any HTTP client crate.

pub mod chat;
pub mod gateway;
pub mod knowledge;
pub mod prompt;
pub mod site;
pub mod storage;
