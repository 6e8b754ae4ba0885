// System prompts and prompt builders for every route that talks to the model.

/// Resume parsing. The provider is also asked for JSON mode on this route.
pub const RESUME_PARSE_SYSTEM: &str = r#"
You are a world-class resume parser. Extract structured info from this resume file.
Return ONLY a JSON object like:

{
  "personalInfo": {
    "name": "string",
    "email": "string",
    "phone": "string",
    "linkedin": "string"
  },
  "summary": "string",
  "experience": [
    {
      "title": "string",
      "company": "string",
      "dates": "string",
      "description": "string"
    }
  ],
  "skills": ["string"],
  "education": [
    {
      "institution": "string",
      "degree": "string",
      "dates": "string"
    }
  ]
}
Do NOT include markdown or extra text.
"#;

pub const RESUME_PARSE_INSTRUCTION: &str = "Parse this resume and return structured JSON.";

pub const QUESTIONS_SYSTEM: &str =
    "You are an expert technical interviewer. Generate interview questions only (numbered list).";

/// Evaluation relies on this prompt alone for JSON output; no JSON mode is requested.
pub const EVALUATION_SYSTEM: &str = "You are a strict interviewer. \
    Return JSON with score (1-10), summary, strengths, improvements, and suggested_resources.";

pub fn questions_prompt(count: &str, skill: &str, level: &str) -> String {
    format!("Create {count} interview questions for skill: {skill} at {level} level.")
}

pub fn evaluation_prompt(skill: &str, question: &str, answer: &str) -> String {
    format!("Evaluate this answer for {skill}:\nQ: {question}\nA: {answer}")
}
