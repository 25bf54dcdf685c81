//! System prompt builder.
//!
//! Layout:
//! ```text
//! {persona intro}\n\n{organisation context}\n\n{guidelines}
//! \n\nADDITIONAL KNOWLEDGE FROM ADMIN:\n{knowledge}          (knowledge non-empty)
//! \n\nCOURSE-SPECIFIC INSTRUCTIONS:\n{course focus}\n\n{suffix}   (course id known)
//! ```

use super::courses::{course_prompt, COURSE_FOCUS_SUFFIX};
use super::persona::Persona;

/// Header that introduces the admin knowledge block.
pub const ADMIN_KNOWLEDGE_HEADER: &str = "ADDITIONAL KNOWLEDGE FROM ADMIN:";

/// Header that introduces the course block.
pub const COURSE_INSTRUCTIONS_HEADER: &str = "COURSE-SPECIFIC INSTRUCTIONS:";

/// Builds the system prompt sent as the first message of every gateway call.
///
/// Pure: the output depends only on the arguments.
pub struct SystemPromptBuilder;

impl SystemPromptBuilder {
    /// Compose the full system prompt.
    ///
    /// An empty `knowledge` adds nothing. A `course_id` that is absent or not
    /// in the catalog adds nothing and is not an error.
    pub fn build(persona: &Persona, knowledge: &str, course_id: Option<&str>) -> String {
        let mut prompt = persona.render();

        if !knowledge.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(ADMIN_KNOWLEDGE_HEADER);
            prompt.push('\n');
            prompt.push_str(knowledge);
        }

        if let Some(focus) = course_id.and_then(course_prompt) {
            prompt.push_str(&Self::course_section(focus));
        }

        prompt
    }

    fn course_section(focus: &str) -> String {
        format!("\n\n{COURSE_INSTRUCTIONS_HEADER}\n{focus}\n\n{COURSE_FOCUS_SUFFIX}")
    }
}
