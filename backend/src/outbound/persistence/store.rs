//! Connection bootstrap for the MongoDB item store.
//!
//! [`connect`] parses the connection string, pings the database and ensures
//! the unique index on the client-generated `id` field. Handlers rely on that
//! index to reject duplicate ids atomically, so the server refuses to start
//! without it.

use std::time::Duration;

use bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use tracing::{debug, info};

use super::item_document::ItemDocument;

const ID_INDEX_NAME: &str = "id_unique";
const APP_NAME: &str = "listings-backend";

/// Errors raised while connecting to the item store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed.
    #[error("invalid item store URI: {message}")]
    InvalidUri { message: String },

    /// The database did not answer the startup ping.
    #[error("item store unreachable: {message}")]
    Unreachable { message: String },

    /// The unique index on `id` could not be created.
    #[error("failed to ensure item id index: {message}")]
    Index { message: String },
}

impl StoreError {
    /// Create an invalid URI error with the given message.
    pub fn invalid_uri(message: impl Into<String>) -> Self {
        Self::InvalidUri {
            message: message.into(),
        }
    }

    /// Create an unreachable error with the given message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    /// Create an index error with the given message.
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index {
            message: message.into(),
        }
    }
}

/// Location of the item collection and connection limits.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use listings_backend::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017", "itemsDB", "items")
///     .with_server_selection_timeout(Duration::from_secs(2));
/// assert_eq!(config.database(), "itemsDB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    uri: String,
    database: String,
    collection: String,
    server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration for `collection` in `database` at `uri`.
    ///
    /// Server selection times out after 10 seconds unless overridden.
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            collection: collection.into(),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    /// Bound how long operations wait for a reachable server.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// MongoDB connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database holding the item collection.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Item collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Server selection timeout applied to the client.
    pub fn server_selection_timeout(&self) -> Duration {
        self.server_selection_timeout
    }
}

/// Connect to the item store and prepare the collection.
///
/// # Errors
///
/// - [`StoreError::InvalidUri`] when the connection string is malformed.
/// - [`StoreError::Unreachable`] when the ping fails.
/// - [`StoreError::Index`] when the unique `id` index cannot be ensured,
///   for example because existing documents already share an id.
pub async fn connect(config: &StoreConfig) -> Result<Collection<ItemDocument>, StoreError> {
    let mut options = ClientOptions::parse(config.uri())
        .await
        .map_err(|err| StoreError::invalid_uri(err.to_string()))?;
    options.app_name = Some(APP_NAME.to_owned());
    options.server_selection_timeout = Some(config.server_selection_timeout());

    let client =
        Client::with_options(options).map_err(|err| StoreError::invalid_uri(err.to_string()))?;
    let database = client.database(config.database());
    database
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|err| StoreError::unreachable(err.to_string()))?;
    debug!(database = config.database(), "item store answered ping");

    let collection = database.collection::<ItemDocument>(config.collection());
    ensure_id_index(&collection).await?;
    info!(
        database = config.database(),
        collection = config.collection(),
        "item store ready"
    );
    Ok(collection)
}

fn id_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(ID_INDEX_NAME.to_owned())
                .build(),
        )
        .build()
}

async fn ensure_id_index(collection: &Collection<ItemDocument>) -> Result<(), StoreError> {
    let created = collection
        .create_index(id_index(), None)
        .await
        .map_err(|err| StoreError::index(err.to_string()))?;
    debug!(index = %created.index_name, "item id index ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn config_defaults_server_selection_timeout() {
        let config = StoreConfig::new("mongodb://localhost:27017", "itemsDB", "items");
        assert_eq!(config.server_selection_timeout(), Duration::from_secs(10));
        assert_eq!(config.uri(), "mongodb://localhost:27017");
        assert_eq!(config.collection(), "items");
    }

    #[test]
    fn id_index_is_unique_on_id() {
        let model = id_index();
        assert_eq!(model.keys, doc! { "id": 1 });
        let options = model.options.expect("index options");
        assert_eq!(options.unique, Some(true));
        assert_eq!(options.name.as_deref(), Some(ID_INDEX_NAME));
    }

    #[rstest]
    #[case("not-a-uri")]
    #[case("http://localhost:27017")]
    #[tokio::test]
    async fn connect_rejects_malformed_uri(#[case] uri: &str) {
        let config = StoreConfig::new(uri, "itemsDB", "items");
        let err = connect(&config).await.expect_err("malformed uri");
        assert!(matches!(err, StoreError::InvalidUri { .. }), "{err:?}");
    }

    #[test]
    fn errors_render_cause() {
        assert_eq!(
            StoreError::unreachable("timed out").to_string(),
            "item store unreachable: timed out"
        );
    }
}
