use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{app::models::api_response::ApiResponse, i18n::translator::Translator};

use super::outcome::ValidationOutcome;

/// Ends validation for a request: `Ok` lets it continue, otherwise the
/// translated messages are sent back as a 422.
pub fn error_response(
    outcome: &ValidationOutcome,
    translator: &Translator,
    locale: &str,
) -> Result<(), Response> {
    if outcome.is_empty() {
        return Ok(());
    }

    let messages = outcome.messages(translator, locale);

    tracing::debug!(
        violations = messages.len(),
        locale = locale,
        "request failed validation"
    );

    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::<()>::failure(messages)),
    )
        .into_response())
}
