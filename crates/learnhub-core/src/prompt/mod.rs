//! System prompt composition.
//!
//! - `persona`: the tutor persona and organisation context
//! - `courses`: static course identifier -> focus table
//! - `builder`: layers persona, admin knowledge and course focus in fixed order

pub mod builder;
pub mod courses;
pub mod persona;

pub use builder::SystemPromptBuilder;
pub use persona::Persona;
