//! Answer evaluation — grades a candidate answer and never fails on bad model output.

use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{evaluation_prompt, EVALUATION_SYSTEM};
use crate::llm_client::{ChatGateway, ChatMessage};

pub const INVALID_SUMMARY: &str = "Invalid AI response";

/// The grading record the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    /// 1-10 from the model; 0 only in the placeholder record.
    pub score: u8,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggested_resources: Vec<String>,
}

impl EvaluationRecord {
    /// Placeholder returned when the model's answer is not JSON.
    pub fn invalid() -> Self {
        Self {
            score: 0,
            summary: INVALID_SUMMARY.to_string(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            suggested_resources: Vec::new(),
        }
    }
}

/// What the evaluate route returns: the model's JSON as decoded, or the placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    Graded(Value),
    Invalid(EvaluationRecord),
}

/// Decodes the model's text. Anything that is not JSON becomes the placeholder.
pub fn interpret(text: &str) -> Evaluation {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Evaluation::Graded(value),
        Err(e) => {
            warn!("Evaluation output was not JSON ({e}); returning placeholder");
            Evaluation::Invalid(EvaluationRecord::invalid())
        }
    }
}

/// Grades `answer` to `question` for `skill`.
///
/// Errors only when the upstream call itself fails.
pub async fn evaluate_answer(
    question: &str,
    answer: &str,
    skill: &str,
    llm: &dyn ChatGateway,
    model: &str,
) -> Result<Evaluation, AppError> {
    let messages = [
        ChatMessage::system(EVALUATION_SYSTEM),
        ChatMessage::user(evaluation_prompt(skill, question, answer)),
    ];

    // No JSON mode here; the system prompt alone asks for JSON.
    let envelope = llm.complete(&messages, model, None).await.map_err(|e| {
        error!("Evaluate error: {}", e.details());
        AppError::upstream("Evaluation failed")
    })?;

    Ok(interpret(envelope.text().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_text_yields_exact_placeholder() {
        let out = serde_json::to_value(interpret("Great answer, 8/10!")).unwrap();
        assert_eq!(
            out,
            json!({
                "score": 0,
                "summary": "Invalid AI response",
                "strengths": [],
                "improvements": [],
                "suggested_resources": []
            })
        );
    }

    #[test]
    fn test_empty_text_yields_placeholder() {
        assert_eq!(
            interpret(""),
            Evaluation::Invalid(EvaluationRecord::invalid())
        );
    }

    #[test]
    fn test_valid_json_passes_through() {
        let graded = json!({
            "score": 7,
            "summary": "Solid",
            "strengths": ["clear"],
            "improvements": ["depth"],
            "suggested_resources": ["MDN"]
        });
        let out = interpret(&graded.to_string());
        assert_eq!(out, Evaluation::Graded(graded.clone()));
        assert_eq!(serde_json::to_value(out).unwrap(), graded);
    }
}
