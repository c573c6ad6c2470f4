//! Driven port for item persistence adapters and their errors.
//!
//! Each operation maps onto a single store call. Lookups are keyed by the
//! client-generated [`ItemId`], never by a store-internal identifier.

use async_trait::async_trait;

use crate::domain::{Item, ItemChanges, ItemId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by item repository adapters.
    pub enum ItemRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "item store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "item store query failed: {message}",
        /// The uniqueness constraint on the item id rejected an insert.
        DuplicateId { id: String } => "item id already exists: {id}",
    }
}

/// Result of replacing an item's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Result of deleting an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Driven port over the item collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch every stored item in the store's natural order.
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Insert a new item, failing with `DuplicateId` when the id is taken.
    async fn insert(&self, item: &Item) -> Result<(), ItemRepositoryError>;

    /// Overwrite the fields carried by `changes` on the item with `id`.
    ///
    /// The stored id and date, and optional fields absent from `changes`,
    /// are left untouched.
    async fn update(
        &self,
        id: &ItemId,
        changes: &ItemChanges,
    ) -> Result<UpdateOutcome, ItemRepositoryError>;

    /// Remove the item with `id`.
    async fn delete(&self, id: &ItemId) -> Result<DeleteOutcome, ItemRepositoryError>;
}
