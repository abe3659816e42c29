use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::error::{Result, AppError};
use crate::api::models::{SummarizeRequest, SummarizeResponse};
use crate::summarizer::{build_messages, trim_text, word_count, PromptPlan, TEMPERATURE};
use crate::AppState;

pub const HEALTH_MESSAGE: &str = "FlashRead backend is running";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/summarize", post(summarize_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}

// A missing or unparseable body is handled like `{}` and fails validation.
async fn summarize_handler(
    State(state): State<AppState>,
    payload: Option<Json<SummarizeRequest>>,
) -> Result<Json<SummarizeResponse>> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let start_time = Instant::now();

    match process_summarize_request(&state, &req).await {
        Ok(response) => {
            info!(
                original_words = response.original_word_count,
                summary_words = response.summary_word_count,
                elapsed_ms = start_time.elapsed().as_millis(),
                "Summarization completed"
            );
            Ok(Json(response))
        }
        Err(err) => {
            match &err {
                AppError::InvalidInput(msg) => warn!("Rejected summarize request: {}", msg),
                _ => error!(
                    elapsed_ms = start_time.elapsed().as_millis(),
                    "Summarization error: {}", err
                ),
            }
            Err(err)
        }
    }
}

pub async fn process_summarize_request(
    state: &AppState,
    req: &SummarizeRequest,
) -> Result<SummarizeResponse> {
    let cleaned_text = req
        .text()
        .map(trim_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::InvalidInput("text is missing or blank".to_string()))?;

    let original_word_count = word_count(cleaned_text);
    let length = req.length();
    let format = req.format();
    info!(
        original_words = original_word_count,
        ?length,
        ?format,
        "Processing summarize request"
    );

    let plan = PromptPlan::new(length, format);
    let messages = build_messages(&plan, cleaned_text);

    let llm_start = Instant::now();
    let completion = state
        .completer
        .complete(&messages, &state.config.openai_model, TEMPERATURE);

    let reply = match state.config.completion_timeout {
        Some(limit) => tokio::time::timeout(limit, completion)
            .await
            .map_err(|_| AppError::Timeout(limit))??,
        None => completion.await?,
    };
    info!("Completion call returned in {:?}", llm_start.elapsed());

    let summary_text = trim_text(&reply).to_string();
    let summary_word_count = word_count(&summary_text);

    Ok(SummarizeResponse {
        summary_text,
        original_word_count,
        summary_word_count,
        length_setting: req.length_setting(),
        format_setting: req.format_setting(),
    })
}
