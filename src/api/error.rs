use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::provider::ProviderError;

use super::models::{AskResponse, CONNECTION_ERROR_TEXT, PROMPT_MISSING_TEXT};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request carried no usable prompt")]
    MissingPrompt,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // The provider failure keeps its detail in the log; the body only
        // ever carries the fixed fallback texts.
        let (status, text) = match &self {
            Self::MissingPrompt => (StatusCode::BAD_REQUEST, PROMPT_MISSING_TEXT),
            Self::Provider(err) => {
                warn!(error = %err, "text generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, CONNECTION_ERROR_TEXT)
            }
        };

        (
            status,
            Json(AskResponse {
                text: text.to_string(),
            }),
        )
            .into_response()
    }
}
