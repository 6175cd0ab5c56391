use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const ANSWER_SOURCE: &str = "OpenRouter DeepSeek API";
pub const ANSWER_CONFIDENCE: f64 = 0.85;

#[derive(Deserialize, Validate, Debug)]
pub struct AskRequest {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub confidence: f64,
}

/// Per-invocation record of a question. Lives only for the request; its id
/// tags the request's log span.
#[derive(Debug)]
pub struct QueryRecord {
    pub id: Uuid,
    pub question: String,
    pub context: Option<String>,
    pub answer: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl QueryRecord {
    pub fn new(req: AskRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: req.question,
            context: req.context,
            answer: String::new(),
            confidence: ANSWER_CONFIDENCE,
            sources: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn answered(mut self, answer: String) -> Self {
        self.answer = answer;
        self.sources = vec![ANSWER_SOURCE.to_string()];
        self
    }
}

impl From<QueryRecord> for AskResponse {
    fn from(record: QueryRecord) -> Self {
        Self {
            answer: record.answer,
            sources: record.sources,
            confidence: record.confidence,
        }
    }
}
