//! MongoDB persistence adapters.
//!
//! This module provides the concrete implementation of the
//! [`ItemRepository`](crate::domain::ports::ItemRepository) port backed by a
//! single MongoDB collection.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between stored
//!   documents and domain types.
//! - **Internal documents**: [`ItemDocument`] mirrors the stored shape,
//!   including the store-assigned `_id` that never reaches the domain.
//! - **Startup gate**: [`connect`] verifies reachability and the unique index
//!   on `id` before any request is served.
//!
//! # Example
//!
//! ```ignore
//! use listings_backend::outbound::persistence::{StoreConfig, MongoItemRepository, connect};
//!
//! let config = StoreConfig::new("mongodb://localhost:27017", "itemsDB", "items");
//! let collection = connect(&config).await?;
//! let repo = MongoItemRepository::new(collection);
//! ```

mod item_document;
mod mongo_item_repository;
mod store;

pub use item_document::ItemDocument;
pub use mongo_item_repository::MongoItemRepository;
pub use store::{StoreConfig, StoreError, connect};
