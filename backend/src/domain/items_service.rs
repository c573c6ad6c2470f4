//! Item domain service.
//!
//! Implements the [`ItemsCommand`] and [`ItemsQuery`] driving ports on top of
//! an [`ItemRepository`]. Store failures are logged here with their cause and
//! surfaced as domain errors; the HTTP adapter redacts internal messages.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    DeleteOutcome, ItemRepository, ItemRepositoryError, ItemsCommand, ItemsQuery, UpdateOutcome,
};
use crate::domain::{Error, Item, ItemChanges, ItemId, NewItem};

/// Item service implementing the driving ports.
#[derive(Clone)]
pub struct ItemsService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ItemsService<R> {
    /// Create a service over `repository`, stamping inserts with `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> ItemsService<R>
where
    R: ItemRepository,
{
    fn map_repository_error(operation: &'static str, err: ItemRepositoryError) -> Error {
        error!(operation, error = %err, "item store operation failed");
        match err {
            ItemRepositoryError::DuplicateId { id } => {
                Error::internal(format!("unexpected duplicate id {id} during {operation}"))
            }
            ItemRepositoryError::Connection { message } | ItemRepositoryError::Query { message } => {
                Error::internal(format!("{operation} failed: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> ItemsQuery for ItemsService<R>
where
    R: ItemRepository,
{
    async fn list(&self) -> Result<Vec<Item>, Error> {
        self.repository
            .list()
            .await
            .map_err(|err| Self::map_repository_error("list items", err))
    }
}

#[async_trait]
impl<R> ItemsCommand for ItemsService<R>
where
    R: ItemRepository,
{
    async fn create(&self, item: NewItem) -> Result<(), Error> {
        let item = item.into_item(self.clock.utc());
        match self.repository.insert(&item).await {
            Ok(()) => {
                info!(item_id = %item.id, user_id = %item.fields.user_id, "item created");
                Ok(())
            }
            Err(ItemRepositoryError::DuplicateId { id }) => {
                warn!(item_id = %id, user_id = %item.fields.user_id, "duplicate item id rejected");
                Err(Error::duplicate_id())
            }
            Err(err) => Err(Self::map_repository_error("create item", err)),
        }
    }

    async fn update(&self, id: ItemId, changes: ItemChanges) -> Result<(), Error> {
        let outcome = self
            .repository
            .update(&id, &changes)
            .await
            .map_err(|err| Self::map_repository_error("update item", err))?;
        match outcome {
            UpdateOutcome::Updated => {
                info!(item_id = %id, "item updated");
                Ok(())
            }
            UpdateOutcome::NotFound => {
                warn!(item_id = %id, "update target not found");
                Err(Error::item_not_found())
            }
        }
    }

    async fn delete(&self, id: ItemId) -> Result<(), Error> {
        let outcome = self
            .repository
            .delete(&id)
            .await
            .map_err(|err| Self::map_repository_error("delete item", err))?;
        match outcome {
            DeleteOutcome::Deleted => {
                info!(item_id = %id, "item removed");
                Ok(())
            }
            DeleteOutcome::NotFound => {
                warn!(item_id = %id, "delete target not found");
                Err(Error::item_not_found())
            }
        }
    }
}
