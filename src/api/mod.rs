mod error;
mod handlers;
mod models;

use axum::{routing::post, Router};

use crate::AppState;

pub use error::RelayError;
pub use handlers::{ask, not_found};
pub use models::{
    AskRequest, AskResponse, ErrorResponse, CONNECTION_ERROR_TEXT, NO_ANSWER_TEXT,
    PROMPT_MISSING_TEXT,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask))
        .fallback(not_found)
        .with_state(state)
}
