//! `learnhub prompt` -- preview the composed system prompt.

use learnhub_core::prompt::courses::course_prompt;
use learnhub_core::prompt::{Persona, SystemPromptBuilder};

use crate::state::AppState;

pub async fn print_prompt(
    state: &AppState,
    course: Option<&str>,
    with_knowledge: bool,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(id) = course.filter(|id| course_prompt(id).is_none()) {
        eprintln!("Unknown course '{id}', no course-specific instructions will be added.");
    }

    let prompt = if with_knowledge {
        state.chat.compose_for(course).await
    } else {
        SystemPromptBuilder::build(&Persona::learning_hub(), "", course)
    };

    if json {
        let out = serde_json::json!({
            "course_id": course,
            "with_knowledge": with_knowledge,
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{prompt}");
    }
    Ok(())
}
