//! Stored representation of an item.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::ItemRepositoryError;
use crate::domain::{Item, ItemFields, ItemId};

/// Item document as held in the collection.
///
/// `object_id` is the store-assigned `_id`; it is never exposed through the
/// domain. Lookups use the client-generated `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub city: String,
    pub phone_number: String,
    pub user_name: String,
    pub user_id: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        let ItemFields {
            title,
            description,
            location,
            city,
            phone_number,
            user_name,
            user_id,
        } = item.fields.clone();
        Self {
            object_id: None,
            id: item.id.to_string(),
            title,
            description,
            location,
            city,
            phone_number,
            user_name,
            user_id,
            date: item.date,
        }
    }
}

impl TryFrom<ItemDocument> for Item {
    type Error = ItemRepositoryError;

    fn try_from(doc: ItemDocument) -> Result<Self, Self::Error> {
        let id = ItemId::new(doc.id).map_err(|err| {
            ItemRepositoryError::query(format!(
                "stored document {} is invalid: {err}",
                doc.object_id.map(|oid| oid.to_hex()).unwrap_or_default()
            ))
        })?;
        Ok(Self {
            id,
            fields: ItemFields {
                title: doc.title,
                description: doc.description,
                location: doc.location,
                city: doc.city,
                phone_number: doc.phone_number,
                user_name: doc.user_name,
                user_id: doc.user_id,
            },
            date: doc.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{Bson, doc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn item() -> Item {
        Item {
            id: ItemId::new("a1").expect("valid id"),
            fields: ItemFields {
                title: "Lamp".into(),
                description: String::new(),
                location: "Main St".into(),
                city: "Springfield".into(),
                phone_number: "555".into(),
                user_name: "Bob".into(),
                user_id: "u1".into(),
            },
            date: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .expect("timestamp")
                .with_timezone(&Utc),
        }
    }

    #[rstest]
    fn serialises_camel_case_with_bson_date(item: Item) {
        let document = bson::to_document(&ItemDocument::from(&item)).expect("serialise");
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("phoneNumber").expect("phone"), "555");
        assert!(matches!(document.get("date"), Some(Bson::DateTime(_))));
    }

    #[rstest]
    fn stored_document_maps_back_to_item(item: Item) {
        let stored = doc! {
            "_id": ObjectId::new(),
            "id": "a1",
            "title": "Lamp",
            "location": "Main St",
            "city": "Springfield",
            "phoneNumber": "555",
            "userName": "Bob",
            "userId": "u1",
            "date": bson::DateTime::from_chrono(item.date),
        };
        let document: ItemDocument = bson::from_document(stored).expect("deserialise");
        assert!(document.object_id.is_some());
        let mapped = Item::try_from(document).expect("valid document");
        assert_eq!(mapped, item);
    }

    #[rstest]
    fn blank_stored_id_is_a_query_error(item: Item) {
        let mut document = ItemDocument::from(&item);
        document.id = String::new();
        let err = Item::try_from(document).expect_err("blank id");
        assert!(matches!(err, ItemRepositoryError::Query { .. }));
    }
}
