use serde::Serialize;
use thiserror::Error;

/// One field-level problem found while reading an inbound request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: Vec<String>,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: &[&str], code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|p| p.to_string()).collect(),
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method {method} not allowed, expected {allow}")]
    MethodNotAllowed { method: String, allow: &'static str },
    #[error("Validation failed: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),
    #[error("OpenRouter API key is not configured")]
    MissingApiKey,
    #[error("Upstream API error: {0}")]
    Upstream(String),
    #[error("Failed to serialize datasets: {0}")]
    DatasetsUnavailable(#[source] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut issues: Vec<ValidationIssue> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| ValidationIssue {
                    path: vec![field.clone()],
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                })
            })
            .collect();
        issues.sort_by(|a, b| a.path.cmp(&b.path));
        AppError::Validation(issues)
    }
}

impl AppError {
    /// Body could not be decoded into the expected request shape.
    pub fn malformed_body(e: &serde_json::Error) -> Self {
        let code = match e.classify() {
            serde_json::error::Category::Data => "invalid_type",
            _ => "invalid_json",
        };
        AppError::Validation(vec![ValidationIssue::new(&[], code, e.to_string())])
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
