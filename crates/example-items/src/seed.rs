//! Generated item seed types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example listing.
///
/// Field names serialise in the same camelCase shape the listings API
/// accepts, so a seed can be posted to `PUT /api/items` as-is. The listing
/// date is not part of the seed; it is stamped at insertion time.
///
/// # Example
///
/// ```
/// use example_items::ExampleItemSeed;
/// use uuid::Uuid;
///
/// let item = ExampleItemSeed {
///     id: Uuid::new_v4(),
///     title: "Rustic Oak Lamp".to_owned(),
///     description: "Barely used.".to_owned(),
///     location: "12 Baker Street".to_owned(),
///     city: "Springfield".to_owned(),
///     phone_number: "555-0100".to_owned(),
///     user_name: "Ada".to_owned(),
///     user_id: "ada@example.com".to_owned(),
/// };
///
/// assert_eq!(item.title, "Rustic Oak Lamp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleItemSeed {
    /// Unique client-style identifier for the item.
    pub id: Uuid,
    /// Product-like listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Street address of the item.
    pub location: String,
    /// City of the item.
    pub city: String,
    /// Contact phone number.
    pub phone_number: String,
    /// First name of the owning user.
    pub user_name: String,
    /// Owning user identifier, an email address.
    pub user_id: String,
}
