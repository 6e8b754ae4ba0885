//! Question generation — turns the model's numbered list into clean question strings.

use tracing::{debug, error};

use crate::errors::AppError;
use crate::llm_client::prompts::{questions_prompt, QUESTIONS_SYSTEM};
use crate::llm_client::{ChatGateway, ChatMessage};

/// Splits model output into questions.
///
/// Lines are trimmed, blank lines dropped, and a leading enumeration marker
/// (`1.`, `2)`, `3 `) removed. Empty input yields an empty list.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_enumeration(line).to_string())
        .collect()
}

/// Removes one or more digits followed by at least one of `)`, `.` or whitespace.
/// Lines without such a marker are returned untouched.
pub fn strip_enumeration(line: &str) -> &str {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits == 0 {
        return line;
    }

    let rest = &line[digits..];
    let stripped = rest.trim_start_matches(|c: char| c == ')' || c == '.' || c.is_whitespace());
    if stripped.len() == rest.len() {
        line
    } else {
        stripped
    }
}

/// Asks the model for `count` questions on `skill` at `level`.
pub async fn generate_questions(
    skill: &str,
    level: &str,
    count: &str,
    llm: &dyn ChatGateway,
    model: &str,
) -> Result<Vec<String>, AppError> {
    let messages = [
        ChatMessage::system(QUESTIONS_SYSTEM),
        ChatMessage::user(questions_prompt(count, skill, level)),
    ];

    let envelope = llm.complete(&messages, model, None).await.map_err(|e| {
        error!("Question error: {}", e.details());
        AppError::upstream("Failed to generate questions")
    })?;

    let questions = parse_questions(envelope.text().unwrap_or_default());
    debug!("Generated {} questions for {skill} ({level})", questions.len());
    Ok(questions)
}
