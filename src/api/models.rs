use serde::{Deserialize, Serialize};

/// Body text of the 400 response when a request carries no usable prompt.
pub const PROMPT_MISSING_TEXT: &str = "Savol yuborilmadi.";

/// Stand-in text when the model answers with nothing (still HTTP 200).
pub const NO_ANSWER_TEXT: &str = "Javob topilmadi.";

/// Body text of the 500 response covering every provider failure.
pub const CONNECTION_ERROR_TEXT: &str = "AI bilan bog‘lanishda xatolik yuz berdi.";

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
