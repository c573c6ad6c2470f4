//! Driving port for reading items.

use async_trait::async_trait;

use crate::domain::{Error, Item};

/// Driving port for listing items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsQuery: Send + Sync {
    /// Return every stored item.
    async fn list(&self) -> Result<Vec<Item>, Error>;
}
