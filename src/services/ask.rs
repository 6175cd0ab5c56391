use tracing::Instrument;
use validator::Validate;

use crate::{
    clients::openrouter::OpenRouterClient,
    config::Settings,
    error::{AppError, Result},
    models::{AskRequest, AskResponse, QueryRecord},
};

pub async fn create_answer(req: AskRequest, settings: &Settings) -> Result<AskResponse> {
    req.validate()?;

    let record = QueryRecord::new(req);
    let span = tracing::info_span!("ask", query_id = %record.id);
    answer(record, settings).instrument(span).await
}

async fn answer(record: QueryRecord, settings: &Settings) -> Result<AskResponse> {
    // No key means no outbound call at all.
    let client = OpenRouterClient::from_settings(settings)?;

    match client.complete(&record.question).await {
        Ok(answer) => {
            tracing::info!(answer_len = answer.len(), "Answer generated");
            Ok(record.answered(answer).into())
        }
        Err(AppError::Upstream(detail)) => {
            tracing::error!(error = %detail, "OpenRouter API error");
            Err(AppError::Upstream(detail))
        }
        Err(e) => Err(e),
    }
}
