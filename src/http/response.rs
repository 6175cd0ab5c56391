use serde_json::{json, Value};
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::error::AppError;

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::MethodNotAllowed { .. } => (
            StatusCode::METHOD_NOT_ALLOWED,
            json!({"error": "Method not allowed"}),
        ),
        AppError::Validation(issues) => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Invalid request format",
                "message": "Please provide a valid question in your request.",
                "details": issues,
            }),
        ),
        AppError::MissingApiKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "API configuration missing",
                "message": "OpenRouter API key is not configured. Please check environment variables.",
            }),
        ),
        AppError::Upstream(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "AI service unavailable",
                "message": "The AI assistant is temporarily unavailable. Please try again later.",
            }),
        ),
        AppError::DatasetsUnavailable(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Failed to fetch datasets",
                "message": "Unable to retrieve Web3 datasets. Please try again later.",
            }),
        ),
        AppError::Other(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred while processing your question. Please try again.",
            }),
        ),
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}

/// Logs the error and renders it. Upstream details were logged where they
/// occurred and stay out of the body.
pub fn failure(err: AppError) -> Result<Response<Body>, Error> {
    match &err {
        AppError::MethodNotAllowed { method, .. } => tracing::debug!(%method, "Rejected request method"),
        AppError::Validation(issues) => tracing::warn!(issues = issues.len(), "Invalid request body"),
        AppError::Upstream(_) => {}
        AppError::Other(e) => tracing::error!(error = %format!("{e:#}"), "Unexpected error"),
        _ => tracing::error!(error = %err, "Request failed"),
    }

    let (status, body) = error_response(&err);
    let mut resp = json_response(status, &body)?;
    if let AppError::MethodNotAllowed { allow, .. } = err {
        resp.headers_mut().insert("Allow", allow.parse()?);
    }
    Ok(resp)
}
