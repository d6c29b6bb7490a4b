use serde::{Deserialize, Serialize};

use fullstack_chat::HistoryEntry;

// -------------------------
// Request DTOs
// -------------------------

// Item creation reuses `fullstack_items::NewItem`.

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub num1: f64,
    pub num2: f64,
    pub operation: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Option<Vec<HistoryEntry>>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
