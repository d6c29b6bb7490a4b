use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fullstack_chat::ChatError;
use fullstack_core::DomainError;

/// Malformed body or missing/mistyped field. Keeps the rejection's own status
/// (400 syntax, 415 content type, 422 data) and serde's field-level text.
pub fn rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(
        status = %rejection.status(),
        "request body rejected: {}",
        rejection.body_text()
    );
    json_error(rejection.status(), "validation_error", rejection.body_text())
}

/// Caller supplied a bad calculation: always a client error.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.code(), err.to_string())
}

pub fn chat_error_to_response(err: ChatError) -> axum::response::Response {
    match err {
        ChatError::Configuration(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", msg)
        }
        ChatError::Upstream(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "upstream_error",
            err.to_string(),
        ),
    }
}

/// `{"error", "message", "detail"}`; `detail` mirrors `message` for browser clients.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let message = message.into();
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.clone(),
            "detail": message,
        })),
    )
        .into_response()
}
