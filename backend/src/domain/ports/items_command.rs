//! Driving port for item mutations.
//!
//! HTTP handlers call [`ItemsCommand`] with already validated input; the
//! implementation owns timestamping and error translation.

use async_trait::async_trait;

use crate::domain::{Error, ItemChanges, ItemId, NewItem};

/// Driving port for creating, updating and deleting items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsCommand: Send + Sync {
    /// Insert a new item stamped with the current time.
    ///
    /// # Errors
    ///
    /// - [`Error::duplicate_id`] when an item with the same id exists.
    /// - [`Error::internal`] for any other store failure.
    async fn create(&self, item: NewItem) -> Result<(), Error>;

    /// Apply validated changes to an existing item.
    ///
    /// # Errors
    ///
    /// - [`Error::item_not_found`] when no item has the given id.
    /// - [`Error::internal`] for store failures.
    async fn update(&self, id: ItemId, changes: ItemChanges) -> Result<(), Error>;

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// - [`Error::item_not_found`] when no item has the given id.
    /// - [`Error::internal`] for store failures.
    async fn delete(&self, id: ItemId) -> Result<(), Error>;
}
