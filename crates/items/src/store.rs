use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use fullstack_core::ItemId;

use crate::item::{placeholder_items, Item, NewItem};

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    next_id: ItemId,
}

/// In-memory item store.
///
/// One instance is created at startup and shared by handle. The sequence and
/// the id counter sit behind a single mutex, so concurrent creates never hand
/// out the same id and never lose an append. Ids are never reused.
#[derive(Debug)]
pub struct ItemStore {
    inner: Mutex<Inner>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    // `Inner` is consistent at every panic point; a poisoned guard is reusable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an item with the next id, stamped with the current time.
    pub fn create(&self, new: NewItem) -> Item {
        let mut inner = self.lock();
        let item = Item {
            id: inner.next_id,
            name: new.name,
            description: new.description,
            price: new.price,
            created_at: Utc::now(),
        };
        inner.next_id = inner.next_id.next();
        inner.items.push(item.clone());
        item
    }

    /// All items in creation order.
    ///
    /// While the store has never been populated this returns freshly stamped
    /// placeholder items instead of an empty list.
    pub fn list(&self) -> Vec<Item> {
        let inner = self.lock();
        if inner.next_id == ItemId::FIRST {
            return placeholder_items(Utc::now());
        }
        inner.items.clone()
    }

    /// Number of stored items (placeholders excluded).
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
