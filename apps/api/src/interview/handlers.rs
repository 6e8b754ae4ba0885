//! Axum route handlers for the interview practice API.

use std::fmt;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate_answer, Evaluation};
use crate::interview::questions::generate_questions;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A request field that only ever ends up inside a prompt.
///
/// Any JSON value is accepted. Strings render verbatim, everything else as
/// compact JSON, so `"count": "5"` and `"count": 5` produce the same prompt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PromptValue(Value);

impl From<&str> for PromptValue {
    fn from(text: &str) -> Self {
        PromptValue(Value::String(text.to_string()))
    }
}

impl From<u32> for PromptValue {
    fn from(n: u32) -> Self {
        PromptValue(Value::from(n))
    }
}

impl fmt::Display for PromptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GenerateQuestionsRequest {
    pub skill: PromptValue,
    pub level: PromptValue,
    pub count: PromptValue,
}

impl Default for GenerateQuestionsRequest {
    fn default() -> Self {
        Self {
            skill: "React".into(),
            level: "junior".into(),
            count: 8u32.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EvaluateRequest {
    pub question: PromptValue,
    pub answer: PromptValue,
    pub skill: PromptValue,
}

impl Default for EvaluateRequest {
    fn default() -> Self {
        Self {
            question: "".into(),
            answer: "".into(),
            skill: "General".into(),
        }
    }
}

/// Missing, non-JSON, or non-object bodies fall back to the route defaults.
fn body_or_default<T: DeserializeOwned + Default>(body: Result<Json<Value>, JsonRejection>) -> T {
    match body {
        Ok(Json(value)) if value.is_object() => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Unreadable request fields ({e}); using defaults");
            T::default()
        }),
        Ok(_) => T::default(),
        Err(rejection) => {
            warn!("No usable JSON body ({rejection}); using defaults");
            T::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let request: GenerateQuestionsRequest = body_or_default(body);
    let questions = generate_questions(
        &request.skill.to_string(),
        &request.level.to_string(),
        &request.count.to_string(),
        state.llm.as_ref(),
        &state.config.model,
    )
    .await?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// POST /api/evaluate
///
/// Always answers 200 with a well-formed record unless the upstream call fails.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Evaluation>, AppError> {
    let request: EvaluateRequest = body_or_default(body);
    let evaluation = evaluate_answer(
        &request.question.to_string(),
        &request.answer.to_string(),
        &request.skill.to_string(),
        state.llm.as_ref(),
        &state.config.model,
    )
    .await?;

    Ok(Json(evaluation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request<T: DeserializeOwned + Default>(value: Value) -> T {
        body_or_default(Ok(Json(value)))
    }

    #[test]
    fn test_generate_request_defaults() {
        let req: GenerateQuestionsRequest = request(json!({}));
        assert_eq!(req.skill.to_string(), "React");
        assert_eq!(req.level.to_string(), "junior");
        assert_eq!(req.count.to_string(), "8");
    }

    #[test]
    fn test_generate_request_overrides() {
        let req: GenerateQuestionsRequest =
            request(json!({ "skill": "Rust", "level": "senior", "count": 3 }));
        assert_eq!(req.skill.to_string(), "Rust");
        assert_eq!(req.level.to_string(), "senior");
        assert_eq!(req.count.to_string(), "3");
    }

    #[test]
    fn test_string_count_renders_like_a_number() {
        let req: GenerateQuestionsRequest = request(json!({ "count": "5" }));
        assert_eq!(req.count.to_string(), "5");
        assert_eq!(req.skill.to_string(), "React");
    }

    #[test]
    fn test_non_object_body_uses_defaults() {
        let req: GenerateQuestionsRequest = request(json!(["Rust", "senior", 3]));
        assert_eq!(req.skill.to_string(), "React");
        assert_eq!(req.count.to_string(), "8");
    }

    #[test]
    fn test_evaluate_request_defaults() {
        let req: EvaluateRequest = request(json!({}));
        assert_eq!(req.question.to_string(), "");
        assert_eq!(req.answer.to_string(), "");
        assert_eq!(req.skill.to_string(), "General");
    }

    #[test]
    fn test_prompt_value_rendering() {
        assert_eq!(PromptValue(json!(null)).to_string(), "null");
        assert_eq!(PromptValue(json!(true)).to_string(), "true");
        assert_eq!(PromptValue(json!(2.5)).to_string(), "2.5");
        assert_eq!(PromptValue(json!(["a", 1])).to_string(), r#"["a",1]"#);
        assert_eq!(PromptValue(json!({ "k": 1 })).to_string(), r#"{"k":1}"#);
    }
}
