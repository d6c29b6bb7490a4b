use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use fullstack_items::NewItem;

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> axum::response::Response {
    let Json(new) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    let item = services.items.create(new);
    tracing::info!(item_id = %item.id, name = %item.name, "item created");

    (StatusCode::OK, Json(item)).into_response()
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.items.list())).into_response()
}
