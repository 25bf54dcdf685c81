//! `learnhub courses`

use learnhub_core::prompt::courses::{course_ids, course_prompt};

/// Longest focus preview shown per course in text mode.
const PREVIEW_CHARS: usize = 72;

pub fn list_courses(json: bool) -> anyhow::Result<()> {
    let ids = course_ids();

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    for id in &ids {
        let focus = course_prompt(id).unwrap_or_default();
        println!("{id:<32} {}", preview(focus));
    }
    println!("\n{} courses", ids.len());
    Ok(())
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("short"), "short");
        let long = "é".repeat(100);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(p.ends_with("..."));
    }
}
