//! Resume Parser — sends an uploaded resume to the model and decodes its JSON answer.
//!
//! The answer is returned exactly as the model produced it. Inner fields are
//! not validated; an absent or undecodable answer is an error for the caller.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::errors::AppError;
use crate::files::UploadedFile;
use crate::llm_client::prompts::{RESUME_PARSE_INSTRUCTION, RESUME_PARSE_SYSTEM};
use crate::llm_client::{
    ChatEnvelope, ChatGateway, ChatMessage, ContentPart, FileAttachment, ResponseFormat,
};

#[derive(Debug, Error)]
pub enum ResumeOutputError {
    /// No usable text in the envelope; carries the whole envelope.
    #[error("Empty AI response")]
    Empty(Value),

    /// Text present but not JSON; carries the text.
    #[error("AI returned invalid JSON")]
    InvalidJson(String),
}

impl From<ResumeOutputError> for AppError {
    fn from(err: ResumeOutputError) -> Self {
        let message = err.to_string();
        match err {
            ResumeOutputError::Empty(envelope) => AppError::content(&message, envelope),
            ResumeOutputError::InvalidJson(raw) => AppError::content(&message, Value::String(raw)),
        }
    }
}

/// System prompt plus one user message holding the instruction and the file.
pub fn build_conversation(file: &UploadedFile) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(RESUME_PARSE_SYSTEM),
        ChatMessage::user_parts(vec![
            ContentPart::Text {
                text: RESUME_PARSE_INSTRUCTION.to_string(),
            },
            ContentPart::File {
                file: FileAttachment {
                    filename: file.file_name.clone(),
                    file_data: file.to_data_url(),
                },
            },
        ]),
    ]
}

/// Extracts the model's answer and decodes it as JSON.
pub fn interpret(envelope: ChatEnvelope) -> Result<Value, ResumeOutputError> {
    let text = match envelope.text() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return Err(ResumeOutputError::Empty(envelope.into_inner())),
    };

    serde_json::from_str(&text).map_err(|_| ResumeOutputError::InvalidJson(text))
}

/// Parses a resume file into the model's structured JSON record.
pub async fn parse_resume(
    file: &UploadedFile,
    llm: &dyn ChatGateway,
    model: &str,
) -> Result<Value, AppError> {
    let messages = build_conversation(file);

    let envelope = llm
        .complete(&messages, model, Some(ResponseFormat::JsonObject))
        .await
        .map_err(|e| {
            let details = e.details();
            error!("Resume error: {details}");
            AppError::upstream_with_details("Resume parsing failed", details)
        })?;

    Ok(interpret(envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde_json::json;

    fn envelope_with(content: Value) -> ChatEnvelope {
        ChatEnvelope(json!({ "choices": [{ "message": { "content": content } }] }))
    }

    #[test]
    fn test_conversation_embeds_file_as_data_url() {
        let file = UploadedFile {
            content: Bytes::from_static(b"%PDF"),
            content_type: "application/pdf".to_string(),
            file_name: "jane.pdf".to_string(),
        };
        let messages = serde_json::to_value(build_conversation(&file)).unwrap();

        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"][0]["text"], RESUME_PARSE_INSTRUCTION);
        assert_eq!(messages[1]["content"][1]["file"]["filename"], "jane.pdf");
        assert_eq!(
            messages[1]["content"][1]["file"]["file_data"],
            "data:application/pdf;base64,JVBERg=="
        );
    }

    #[test]
    fn test_valid_json_is_returned_unmodified() {
        let record = json!({
            "personalInfo": { "name": "Jane", "email": "jane@example.com" },
            "summary": "Engineer",
            "experience": [],
            "skills": ["Rust"],
            "education": [],
            "unexpected": 42
        });
        let parsed = interpret(envelope_with(json!(record.to_string()))).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_text_reports_whole_envelope() {
        let envelope = ChatEnvelope(json!({ "choices": [] , "id": "gen-9" }));
        match interpret(envelope.clone()) {
            Err(ResumeOutputError::Empty(raw)) => assert_eq!(raw, envelope.0),
            other => panic!("expected Empty, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        assert!(matches!(
            interpret(envelope_with(json!(""))),
            Err(ResumeOutputError::Empty(_))
        ));
    }

    #[test]
    fn test_invalid_json_reports_raw_text() {
        let raw = "Sure! Here is the resume: {\"summary\": ";
        match interpret(envelope_with(json!(raw))) {
            Err(ResumeOutputError::InvalidJson(text)) => assert_eq!(text, raw),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn test_content_errors_map_to_raw_output() {
        let err: AppError = ResumeOutputError::InvalidJson("oops".to_string()).into();
        match err {
            AppError::UpstreamContent {
                message,
                raw_output,
            } => {
                assert_eq!(message, "AI returned invalid JSON");
                assert_eq!(raw_output, json!("oops"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
