use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use fullstack_chat::ChatError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ChatRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };
    let history = req.conversation_history.unwrap_or_default();

    match services.chat.chat(&req.message, &history).await {
        Ok(response) => (StatusCode::OK, Json(dto::ChatResponse { response })).into_response(),
        Err(e) => {
            match &e {
                ChatError::Configuration(msg) => tracing::error!("chat unavailable: {msg}"),
                ChatError::Upstream(msg) => tracing::warn!("chat upstream failed: {msg}"),
            }
            errors::chat_error_to_response(e)
        }
    }
}
