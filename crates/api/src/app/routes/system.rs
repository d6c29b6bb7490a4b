use axum::{http::StatusCode, Json};

use crate::app::dto;

pub const STATUS_TEXT: &str = "API is running";

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn status() -> Json<dto::StatusResponse> {
    Json(dto::StatusResponse { status: STATUS_TEXT })
}
