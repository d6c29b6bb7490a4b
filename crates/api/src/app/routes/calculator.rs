use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};

pub async fn calculate(
    body: Result<Json<dto::CalculateRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    match fullstack_calculator::compute(req.num1, req.num2, &req.operation) {
        Ok(calc) => (StatusCode::OK, Json(calc)).into_response(),
        Err(e) => {
            tracing::warn!(operation = %req.operation, "calculation rejected: {e}");
            errors::domain_error_to_response(e)
        }
    }
}
