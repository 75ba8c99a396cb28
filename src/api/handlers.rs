use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

use super::error::RelayError;
use super::models::{AskRequest, AskResponse, ErrorResponse, NO_ANSWER_TEXT};

// The body arrives as a `Result` so that malformed JSON and non-string
// prompts land on the same fixed 400 body as a missing key, instead of
// axum's plain-text rejection.
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, RelayError> {
    let Ok(Json(request)) = payload else {
        return Err(RelayError::MissingPrompt);
    };
    if request.prompt.is_empty() {
        return Err(RelayError::MissingPrompt);
    }

    // Presence is the only validation: a whitespace-only prompt is still a
    // prompt and goes out untouched.
    let text = state.generator.generate(&request.prompt).await?;
    let text = if text.is_empty() {
        NO_ANSWER_TEXT.to_string()
    } else {
        text
    };

    Ok(Json(AskResponse { text }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
