//! Test utilities for the backend crate.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration tests under `tests/`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{DeleteOutcome, ItemRepository, ItemRepositoryError, UpdateOutcome};
use crate::domain::{Item, ItemChanges, ItemId};

/// In-memory `ItemRepository` honouring the unique id constraint.
///
/// Items are kept in insertion order, matching the natural order of a fresh
/// collection.
///
/// # Examples
/// ```
/// use listings_backend::test_support::InMemoryItemRepository;
///
/// let repo = InMemoryItemRepository::default();
/// assert!(repo.snapshot().expect("snapshot").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
}

impl InMemoryItemRepository {
    /// Create a repository pre-populated with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Return a copy of the stored items.
    ///
    /// # Errors
    ///
    /// Returns a connection error when the store lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Item>>, ItemRepositoryError> {
        self.items
            .lock()
            .map_err(|_| ItemRepositoryError::connection("in-memory item store poisoned"))
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        self.snapshot()
    }

    async fn insert(&self, item: &Item) -> Result<(), ItemRepositoryError> {
        let mut items = self.lock()?;
        if items.iter().any(|stored| stored.id == item.id) {
            return Err(ItemRepositoryError::duplicate_id(item.id.to_string()));
        }
        items.push(item.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &ItemId,
        changes: &ItemChanges,
    ) -> Result<UpdateOutcome, ItemRepositoryError> {
        let mut items = self.lock()?;
        match items.iter_mut().find(|stored| &stored.id == id) {
            Some(stored) => {
                changes.apply_to(&mut stored.fields);
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    async fn delete(&self, id: &ItemId) -> Result<DeleteOutcome, ItemRepositoryError> {
        let mut items = self.lock()?;
        let before = items.len();
        items.retain(|stored| &stored.id != id);
        if items.len() == before {
            return Ok(DeleteOutcome::NotFound);
        }
        Ok(DeleteOutcome::Deleted)
    }
}
