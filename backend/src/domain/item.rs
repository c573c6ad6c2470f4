//! Item listing data model.
//!
//! An [`Item`] is a classifieds listing keyed by a client-generated
//! [`ItemId`]. Inbound adapters collect raw, possibly incomplete values into
//! an [`ItemDraft`]; validation turns the draft into [`ItemChanges`] for an
//! update or a [`NewItem`] ready for insertion.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields every create and update payload must carry with a non-empty value.
pub const MANDATORY_FIELDS: [&str; 5] = ["title", "location", "userId", "userName", "phoneNumber"];

/// Validation errors returned when building items from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyId,
    /// Lists the wire names of the absent or empty fields, in payload order.
    MissingFields { fields: Vec<&'static str> },
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "item id must not be empty"),
            Self::MissingFields { fields } => {
                write!(f, "mandatory fields are missing: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// Client-generated item identifier.
///
/// Any non-empty string is accepted; clients conventionally send UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Validate and construct an [`ItemId`].
    ///
    /// # Examples
    /// ```
    /// use listings_backend::domain::ItemId;
    ///
    /// let id = ItemId::new("a1").expect("valid id");
    /// assert_eq!(id.as_ref(), "a1");
    /// assert!(ItemId::new("").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, ItemValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ItemValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Raw item values as received from a client, before validation.
///
/// `None` marks a value the client left out or sent as a falsy scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub user_name: Option<String>,
    pub user_id: Option<String>,
}

impl ItemDraft {
    /// Check the mandatory fields and produce validated [`ItemChanges`].
    ///
    /// A field counts as missing when it is absent or empty. Whitespace is
    /// a value. `description` and `city` are optional.
    ///
    /// # Examples
    /// ```
    /// use listings_backend::domain::{ItemDraft, ItemValidationError};
    ///
    /// let draft = ItemDraft {
    ///     title: Some("Lamp".into()),
    ///     ..ItemDraft::default()
    /// };
    /// let err = draft.validate().expect_err("incomplete draft");
    /// assert_eq!(
    ///     err,
    ///     ItemValidationError::MissingFields {
    ///         fields: vec!["location", "userId", "userName", "phoneNumber"],
    ///     }
    /// );
    /// ```
    pub fn validate(self) -> Result<ItemChanges, ItemValidationError> {
        let mut missing = Vec::new();
        let title = require(self.title, "title", &mut missing);
        let location = require(self.location, "location", &mut missing);
        let user_id = require(self.user_id, "userId", &mut missing);
        let user_name = require(self.user_name, "userName", &mut missing);
        let phone_number = require(self.phone_number, "phoneNumber", &mut missing);

        if !missing.is_empty() {
            return Err(ItemValidationError::MissingFields { fields: missing });
        }

        Ok(ItemChanges {
            title,
            description: self.description,
            location,
            city: self.city,
            phone_number,
            user_name,
            user_id,
        })
    }
}

fn require(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Validated values from a create or update payload.
///
/// Mandatory fields are always present. Optional fields stay `None` when the
/// client omitted them, so an update leaves the stored value alone. Serialises
/// camelCase without the omitted fields, ready for a `$set`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemChanges {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub phone_number: String,
    pub user_name: String,
    pub user_id: String,
}

impl ItemChanges {
    /// Complete listing fields, with omitted optional values left empty.
    pub fn into_fields(self) -> ItemFields {
        ItemFields {
            title: self.title,
            description: self.description.unwrap_or_default(),
            location: self.location,
            city: self.city.unwrap_or_default(),
            phone_number: self.phone_number,
            user_name: self.user_name,
            user_id: self.user_id,
        }
    }

    /// Overwrite `fields` with the values carried by this change set.
    ///
    /// # Examples
    /// ```
    /// use listings_backend::domain::{ItemDraft, ItemFields};
    ///
    /// let mut stored = ItemFields {
    ///     title: "Lamp".into(),
    ///     description: "Brass".into(),
    ///     location: "Main St".into(),
    ///     city: "Springfield".into(),
    ///     phone_number: "555".into(),
    ///     user_name: "Bob".into(),
    ///     user_id: "u1".into(),
    /// };
    /// let changes = ItemDraft {
    ///     title: Some("Chair".into()),
    ///     location: Some("Main St".into()),
    ///     phone_number: Some("555".into()),
    ///     user_name: Some("Bob".into()),
    ///     user_id: Some("u1".into()),
    ///     ..ItemDraft::default()
    /// }
    /// .validate()
    /// .expect("valid draft");
    /// changes.apply_to(&mut stored);
    /// assert_eq!(stored.title, "Chair");
    /// assert_eq!(stored.description, "Brass");
    /// ```
    pub fn apply_to(&self, fields: &mut ItemFields) {
        fields.title.clone_from(&self.title);
        if let Some(description) = &self.description {
            fields.description.clone_from(description);
        }
        fields.location.clone_from(&self.location);
        if let Some(city) = &self.city {
            fields.city.clone_from(city);
        }
        fields.phone_number.clone_from(&self.phone_number);
        fields.user_name.clone_from(&self.user_name);
        fields.user_id.clone_from(&self.user_id);
    }
}

/// Validated, replaceable listing fields.
///
/// ## Invariants
/// - `title`, `location`, `phone_number`, `user_name` and `user_id` are
///   non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemFields {
    #[schema(example = "Lamp")]
    pub title: String,
    #[schema(example = "Brass desk lamp, works fine")]
    pub description: String,
    #[schema(example = "Main St")]
    pub location: String,
    #[schema(example = "Springfield")]
    pub city: String,
    #[schema(example = "555-0100")]
    pub phone_number: String,
    #[schema(example = "Bob")]
    pub user_name: String,
    #[schema(example = "u1")]
    pub user_id: String,
}

/// Validated item awaiting insertion; the store stamps the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub id: ItemId,
    pub fields: ItemFields,
}

impl NewItem {
    /// Validate a create payload: the id and all mandatory fields.
    ///
    /// A missing or empty id is reported alongside the other missing
    /// fields under the wire name `id`.
    pub fn try_from_parts(
        id: Option<String>,
        draft: ItemDraft,
    ) -> Result<Self, ItemValidationError> {
        let id = id.map(ItemId::new).and_then(Result::ok);
        match (id, draft.validate().map(ItemChanges::into_fields)) {
            (Some(id), Ok(fields)) => Ok(Self { id, fields }),
            (None, Ok(_)) => Err(ItemValidationError::MissingFields { fields: vec!["id"] }),
            (Some(_), Err(err)) => Err(err),
            (None, Err(ItemValidationError::MissingFields { fields })) => {
                let mut all = vec!["id"];
                all.extend(fields);
                Err(ItemValidationError::MissingFields { fields: all })
            }
            (None, Err(err)) => Err(err),
        }
    }

    /// Attach the insertion timestamp.
    pub fn into_item(self, date: DateTime<Utc>) -> Item {
        Item {
            id: self.id,
            fields: self.fields,
            date,
        }
    }
}

/// Stored item listing.
///
/// Serialises flat, for example:
/// `{"id":"a1","title":"Lamp",...,"date":"2024-05-01T12:00:00Z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: ItemFields,
    /// Moment the item was inserted.
    pub date: DateTime<Utc>,
}
