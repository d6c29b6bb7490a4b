use axum::{
    routing::{get, post},
    Router,
};

pub mod calculator;
pub mod chat;
pub mod items;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/status", get(system::status))
        .route("/items", post(items::create_item).get(items::list_items))
        .route("/calculate", post(calculator::calculate))
        .route("/chat", post(chat::chat))
}
