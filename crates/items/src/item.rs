use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fullstack_core::ItemId;

/// A user-created record. Owned exclusively by the [`ItemStore`](crate::ItemStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// RFC 3339 timestamp taken when the store created the item.
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new item. No validation beyond the types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Mock items shown while the store has never been populated.
///
/// These are never written into a store.
pub fn placeholder_items(now: DateTime<Utc>) -> Vec<Item> {
    vec![
        Item {
            id: ItemId::new(1),
            name: "Sample Item 1".to_string(),
            description: Some("This is a sample item".to_string()),
            price: 19.99,
            created_at: now,
        },
        Item {
            id: ItemId::new(2),
            name: "Sample Item 2".to_string(),
            description: Some("Another sample item".to_string()),
            price: 29.99,
            created_at: now,
        },
    ]
}
