//! MongoDB-backed `ItemRepository` implementation.
//!
//! Each port operation is a single collection call. Duplicate ids are caught
//! by the unique index on `id` rather than a prior lookup, so concurrent
//! inserts of the same id cannot both succeed.

use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::error::{CommandError, ErrorKind, WriteError, WriteFailure};
use tracing::{debug, warn};

use crate::domain::ports::{DeleteOutcome, ItemRepository, ItemRepositoryError, UpdateOutcome};
use crate::domain::{Item, ItemChanges, ItemId};

use super::item_document::ItemDocument;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Create a repository over a prepared item collection.
    pub fn new(collection: Collection<ItemDocument>) -> Self {
        Self { collection }
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError {
            code: DUPLICATE_KEY_CODE,
            ..
        })) | ErrorKind::Command(CommandError {
            code: DUPLICATE_KEY_CODE,
            ..
        })
    )
}

/// Map driver errors to domain item repository errors.
fn map_mongo_error(error: &mongodb::error::Error) -> ItemRepositoryError {
    debug!(error = %error, "mongodb operation failed");
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. } => ItemRepositoryError::connection(error.to_string()),
        _ => ItemRepositoryError::query(error.to_string()),
    }
}

/// Convert stored documents, skipping any that no longer map to an item.
fn into_items(documents: Vec<ItemDocument>) -> Vec<Item> {
    documents
        .into_iter()
        .filter_map(|document| match Item::try_from(document) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(error = %err, "skipping unreadable stored item");
                None
            }
        })
        .collect()
}

fn id_filter(id: &ItemId) -> bson::Document {
    doc! { "id": id.as_ref() }
}

/// `$set` only the values the change set carries.
fn set_fields(changes: &ItemChanges) -> Result<bson::Document, ItemRepositoryError> {
    let fields = bson::to_document(changes)
        .map_err(|err| ItemRepositoryError::query(format!("failed to encode fields: {err}")))?;
    Ok(doc! { "$set": fields })
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let documents: Vec<ItemDocument> = self
            .collection
            .find(None, None)
            .await
            .map_err(|err| map_mongo_error(&err))?
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err))?;
        debug!(count = documents.len(), "loaded items");
        Ok(into_items(documents))
    }

    async fn insert(&self, item: &Item) -> Result<(), ItemRepositoryError> {
        let document = ItemDocument::from(item);
        match self.collection.insert_one(&document, None).await {
            Ok(result) => {
                debug!(item_id = %item.id, object_id = %result.inserted_id, "inserted item");
                Ok(())
            }
            Err(err) if is_duplicate_key(&err) => {
                Err(ItemRepositoryError::duplicate_id(item.id.to_string()))
            }
            Err(err) => Err(map_mongo_error(&err)),
        }
    }

    async fn update(
        &self,
        id: &ItemId,
        changes: &ItemChanges,
    ) -> Result<UpdateOutcome, ItemRepositoryError> {
        let previous = self
            .collection
            .find_one_and_update(id_filter(id), set_fields(changes)?, None)
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(match previous {
            Some(_) => UpdateOutcome::Updated,
            None => UpdateOutcome::NotFound,
        })
    }

    async fn delete(&self, id: &ItemId) -> Result<DeleteOutcome, ItemRepositoryError> {
        let removed = self
            .collection
            .find_one_and_delete(id_filter(id), None)
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(match removed {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[test]
    fn io_errors_map_to_connection() {
        let err = mongodb::error::Error::from(ErrorKind::Io(Arc::new(io::Error::from(
            io::ErrorKind::ConnectionRefused,
        ))));
        assert!(!is_duplicate_key(&err));
        assert!(matches!(
            map_mongo_error(&err),
            ItemRepositoryError::Connection { .. }
        ));
    }

    fn changes() -> ItemChanges {
        ItemChanges {
            title: "Lamp".into(),
            description: None,
            location: "Main St".into(),
            city: Some(String::new()),
            phone_number: "555".into(),
            user_name: "Bob".into(),
            user_id: "u1".into(),
        }
    }

    #[test]
    fn set_fields_replaces_only_mutable_fields() {
        let update = set_fields(&changes()).expect("encode fields");
        let set = update.get_document("$set").expect("$set document");
        assert_eq!(set.get_str("userName").expect("userName"), "Bob");
        assert!(!set.contains_key("id"));
        assert!(!set.contains_key("date"));
    }

    #[test]
    fn set_fields_leaves_omitted_optional_fields_alone() {
        let update = set_fields(&changes()).expect("encode fields");
        let set = update.get_document("$set").expect("$set document");
        assert!(!set.contains_key("description"));
        assert_eq!(set.get_str("city").expect("city"), "");
    }

    #[test]
    fn unreadable_documents_are_skipped_when_listing() {
        let date = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .expect("timestamp")
            .with_timezone(&chrono::Utc);
        let document = |id: &str| ItemDocument {
            object_id: None,
            id: id.to_owned(),
            title: "Lamp".into(),
            description: String::new(),
            location: "Main St".into(),
            city: String::new(),
            phone_number: "555".into(),
            user_name: "Bob".into(),
            user_id: "u1".into(),
            date,
        };
        let items = into_items(vec![document("a1"), document(""), document("b2")]);
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_ref()).collect();
        assert_eq!(ids, ["a1", "b2"]);
    }

    #[test]
    fn filter_targets_client_id() {
        let id = ItemId::new("a1").expect("valid id");
        assert_eq!(id_filter(&id), doc! { "id": "a1" });
    }
}
