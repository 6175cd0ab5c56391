use serde_json::Value;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    config::Settings,
    error::{AppError, Result, ValidationIssue},
    http::{failure, json_response},
    models::AskRequest,
    services::ask::create_answer,
};

/// POST /api/ask
pub async fn handler(req: Request, settings: &Settings) -> std::result::Result<Response<Body>, Error> {
    if req.method().as_str() != "POST" {
        return failure(AppError::MethodNotAllowed {
            method: req.method().to_string(),
            allow: "POST",
        });
    }

    let answer = match parse_body(req.body()) {
        Ok(parsed) => create_answer(parsed, settings).await,
        Err(e) => Err(e),
    };

    match answer {
        Ok(resp) => json_response(StatusCode::OK, &resp),
        Err(e) => failure(e),
    }
}

fn parse_body(body: &[u8]) -> Result<AskRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(vec![ValidationIssue::new(
            &["question"],
            "invalid_type",
            "Required",
        )]));
    }
    let value: Value = serde_json::from_slice(body).map_err(|e| AppError::malformed_body(&e))?;

    let issues = field_type_issues(&value);
    if !issues.is_empty() {
        return Err(AppError::Validation(issues));
    }
    serde_json::from_value(value).map_err(|e| AppError::malformed_body(&e))
}

/// Type checks on the raw body so each problem is reported against its field.
/// `context` may be absent but not `null`.
fn field_type_issues(value: &Value) -> Vec<ValidationIssue> {
    let Some(fields) = value.as_object() else {
        return vec![ValidationIssue::new(
            &[],
            "invalid_type",
            format!("Expected object, received {}", json_kind(value)),
        )];
    };

    let mut issues = Vec::new();
    match fields.get("question") {
        None => issues.push(ValidationIssue::new(&["question"], "invalid_type", "Required")),
        Some(Value::String(_)) => {}
        Some(other) => issues.push(ValidationIssue::new(
            &["question"],
            "invalid_type",
            format!("Expected string, received {}", json_kind(other)),
        )),
    }
    match fields.get("context") {
        None | Some(Value::String(_)) => {}
        Some(other) => issues.push(ValidationIssue::new(
            &["context"],
            "invalid_type",
            format!("Expected string, received {}", json_kind(other)),
        )),
    }
    issues
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(err: AppError) -> Vec<ValidationIssue> {
        match err {
            AppError::Validation(issues) => issues,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_requires_question() {
        let found = issues(parse_body(b"").unwrap_err());
        assert_eq!(found[0].path, vec!["question".to_string()]);
    }

    #[test]
    fn missing_question_points_at_the_field() {
        let found = issues(parse_body(b"{}").unwrap_err());
        assert_eq!(found, vec![ValidationIssue::new(&["question"], "invalid_type", "Required")]);
    }

    #[test]
    fn non_string_question_is_a_type_error() {
        let found = issues(parse_body(br#"{"question": 42}"#).unwrap_err());
        assert_eq!(
            found,
            vec![ValidationIssue::new(&["question"], "invalid_type", "Expected string, received number")]
        );
    }

    #[test]
    fn null_context_is_rejected() {
        let found = issues(parse_body(br#"{"question":"gm","context":null}"#).unwrap_err());
        assert_eq!(
            found,
            vec![ValidationIssue::new(&["context"], "invalid_type", "Expected string, received null")]
        );
    }

    #[test]
    fn both_fields_are_reported_together() {
        let found = issues(parse_body(br#"{"question":true,"context":[1]}"#).unwrap_err());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, vec!["question".to_string()]);
        assert_eq!(found[1].path, vec!["context".to_string()]);
    }

    #[test]
    fn non_object_body_is_a_type_error() {
        let found = issues(parse_body(b"[1,2]").unwrap_err());
        assert!(found[0].path.is_empty());
        assert_eq!(found[0].message, "Expected object, received array");
    }

    #[test]
    fn broken_json_is_reported() {
        let found = issues(parse_body(b"{question:").unwrap_err());
        assert_eq!(found[0].code, "invalid_json");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed = parse_body(br#"{"question":"gm","context":"defi","extra":true}"#).unwrap();
        assert_eq!(parsed.question, "gm");
        assert_eq!(parsed.context.as_deref(), Some("defi"));
    }
}
